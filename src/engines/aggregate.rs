use crate::error::Result;
use crate::types::{AggregateTable, CategoryCount, TreeNode};
use polars::prelude::*;
use std::collections::HashMap;

/// Count occurrences of each distinct value of `column`.
///
/// Ordering is descending by count, ties in first-seen order. Nulls form no
/// category. A table without rows yields an empty result even when the
/// column itself is absent.
pub fn value_counts(df: &DataFrame, column: &str) -> Result<AggregateTable> {
    if df.height() == 0 {
        return Ok(AggregateTable::empty(column));
    }

    let values = df.column(column)?.cast(&DataType::String)?;
    let mut rows: Vec<CategoryCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for value in values.str()?.into_iter().flatten() {
        match index.get(value) {
            Some(&pos) => rows[pos].count += 1,
            None => {
                index.insert(value.to_string(), rows.len());
                rows.push(CategoryCount {
                    category: value.to_string(),
                    count: 1,
                });
            }
        }
    }

    // sort_by is stable, so equal counts stay in first-seen order
    rows.sort_by(|a, b| b.count.cmp(&a.count));

    Ok(AggregateTable {
        column: column.to_string(),
        rows,
    })
}

/// Per-year counts, ascending by year
pub fn counts_by_year(df: &DataFrame, year_column: &str) -> Result<AggregateTable> {
    let mut table = value_counts(df, year_column)?;
    table
        .rows
        .sort_by_key(|row| row.category.parse::<i64>().unwrap_or(i64::MAX));
    Ok(table)
}

/// Nested row counts along `levels`, e.g. province > district > area.
///
/// Rows with a null at any level are left out. Siblings are ordered like
/// [`value_counts`].
pub fn hierarchy(df: &DataFrame, levels: &[&str]) -> Result<Vec<TreeNode>> {
    let mut roots = Level::default();
    if df.height() == 0 || levels.is_empty() {
        return Ok(Vec::new());
    }

    let columns = levels
        .iter()
        .map(|name| -> Result<StringChunked> {
            Ok(df.column(name)?.cast(&DataType::String)?.str()?.clone())
        })
        .collect::<Result<Vec<StringChunked>>>()?;

    let mut path: Vec<&str> = Vec::with_capacity(levels.len());
    'rows: for i in 0..df.height() {
        path.clear();
        for column in &columns {
            match column.get(i) {
                Some(value) => path.push(value),
                None => continue 'rows,
            }
        }
        roots.insert(&path);
    }

    Ok(roots.into_nodes())
}

/// Siblings under one parent, indexed by label
#[derive(Default)]
struct Level {
    nodes: Vec<(TreeNode, Level)>,
    index: HashMap<String, usize>,
}

impl Level {
    fn insert(&mut self, path: &[&str]) {
        let Some((head, rest)) = path.split_first() else {
            return;
        };

        let pos = match self.index.get(*head) {
            Some(&pos) => pos,
            None => {
                self.index.insert(head.to_string(), self.nodes.len());
                self.nodes.push((TreeNode::new(head), Level::default()));
                self.nodes.len() - 1
            }
        };

        let (node, children) = &mut self.nodes[pos];
        node.count += 1;
        children.insert(rest);
    }

    fn into_nodes(self) -> Vec<TreeNode> {
        let mut nodes: Vec<TreeNode> = self
            .nodes
            .into_iter()
            .map(|(mut node, children)| {
                node.children = children.into_nodes();
                node
            })
            .collect();
        nodes.sort_by(|a, b| b.count.cmp(&a.count));
        nodes
    }
}

use serde::{Deserialize, Serialize};

/// Severity of a message shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// User-visible message produced while building a render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Warning, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }
}

/// One (category, count) row of an aggregate table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    pub count: usize,
}

/// Occurrence counts per distinct value of one column.
///
/// Rows are ordered by descending count; equal counts keep the order in
/// which their category first appeared in the source table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateTable {
    pub column: String,
    pub rows: Vec<CategoryCount>,
}

impl AggregateTable {
    pub fn empty(column: &str) -> Self {
        Self { column: column.to_string(), rows: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn total(&self) -> usize {
        self.rows.iter().map(|r| r.count).sum()
    }

    pub fn get(&self, category: &str) -> Option<usize> {
        self.rows.iter().find(|r| r.category == category).map(|r| r.count)
    }

    /// Pairs as (label, value) ready for charting
    pub fn as_pairs(&self) -> Vec<(String, f64)> {
        self.rows.iter().map(|r| (r.category.clone(), r.count as f64)).collect()
    }
}

/// Node of a nested count tree (province > district > area)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub label: String,
    pub count: usize,
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(label: &str) -> Self {
        Self { label: label.to_string(), count: 0, children: Vec::new() }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

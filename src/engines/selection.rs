use crate::error::Result;
use polars::prelude::*;

/// The `n` rows with the largest values in `column`, largest first.
///
/// Ties keep original row order; nulls and NaN are never selected.
pub fn nlargest(df: &DataFrame, column: &str, n: usize) -> Result<DataFrame> {
    let values = df.column(column)?.cast(&DataType::Float64)?;
    let mut candidates: Vec<(IdxSize, f64)> = values
        .f64()?
        .into_iter()
        .enumerate()
        .filter_map(|(i, v)| v.filter(|v| !v.is_nan()).map(|v| (i as IdxSize, v)))
        .collect();

    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates.truncate(n);

    let indices = IdxCa::from_vec("idx".into(), candidates.into_iter().map(|(i, _)| i).collect());
    Ok(df.take(&indices)?)
}

/// 1-based ascending rank of each value; equal values rank in order of appearance
pub fn rank_first(values: &[f64]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0; values.len()];
    for (rank, idx) in order.into_iter().enumerate() {
        ranks[idx] = rank + 1;
    }
    ranks
}

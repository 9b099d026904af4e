use crate::error::{DashboardError, Result};
use polars::prelude::*;
use rand::Rng;
use std::ops::Range;

/// `len` integers drawn uniformly from the half-open `range`
pub fn random_values<R: Rng + ?Sized>(rng: &mut R, len: usize, range: Range<i64>) -> Result<Vec<i64>> {
    if range.is_empty() {
        return Err(DashboardError::Derivation(format!(
            "empty range [{}, {})",
            range.start, range.end
        )));
    }
    Ok((0..len).map(|_| rng.gen_range(range.clone())).collect())
}

/// Copy of `df` with a random integer column `name`.
///
/// A table that already carries `name` is returned unchanged and the
/// generator is not advanced.
pub fn with_synthetic_column<R: Rng + ?Sized>(
    df: &DataFrame,
    name: &str,
    range: Range<i64>,
    rng: &mut R,
) -> Result<DataFrame> {
    if df.get_column_names().iter().any(|c| c.as_str() == name) {
        log::debug!("Column '{}' already present, keeping existing values", name);
        return Ok(df.clone());
    }

    let values = random_values(rng, df.height(), range)?;
    log::debug!("Generated {} values for '{}'", values.len(), name);

    let mut table = df.clone();
    table.with_column(Column::new(name.into(), values))?;
    Ok(table)
}

use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

/// Trait for configuration sections
pub trait ConfigSection: Serialize + for<'de> Deserialize<'de> + Default + Clone {
    fn section_name() -> &'static str;
    fn validate(&self) -> Result<(), DashboardError>;
}

/// Shared check for half-open `[min, max)` integer ranges
pub(crate) fn validate_range(
    section: &str,
    field: &str,
    min: i64,
    max: i64,
) -> Result<(), DashboardError> {
    if min >= max {
        return Err(DashboardError::Configuration(format!(
            "{}.{}: range [{}, {}) is empty",
            section, field, min, max
        )));
    }
    Ok(())
}

use super::traits::{validate_range, ConfigSection};
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

/// Seed and ranges for the simulated area/population columns
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyntheticConfig {
    pub seed: u64,
    pub area_min: i64,
    pub area_max: i64,
    pub population_min: i64,
    pub population_max: i64,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            area_min: 100,
            area_max: 10_000,
            population_min: 1_000,
            population_max: 100_000,
        }
    }
}

impl ConfigSection for SyntheticConfig {
    fn section_name() -> &'static str {
        "synthetic"
    }

    fn validate(&self) -> Result<(), DashboardError> {
        validate_range(Self::section_name(), "area", self.area_min, self.area_max)?;
        validate_range(
            Self::section_name(),
            "population",
            self.population_min,
            self.population_max,
        )?;
        Ok(())
    }
}

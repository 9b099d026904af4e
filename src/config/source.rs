use super::traits::ConfigSection;
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

pub const DEFAULT_LOCATION: &str =
    "https://raw.githubusercontent.com/Hasin-Vin/Data-Science-Project-life-cycle-2/main/cleaned_admin4_data.csv";

/// Where the record table comes from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Local path or http(s) URL
    pub location: String,
    pub timeout_secs: u64,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            timeout_secs: 30,
        }
    }
}

impl ConfigSection for SourceConfig {
    fn section_name() -> &'static str {
        "source"
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.location.trim().is_empty() {
            return Err(DashboardError::Configuration(
                "Source location must not be empty".to_string()
            ));
        }
        if self.timeout_secs == 0 {
            return Err(DashboardError::Configuration(
                "Source timeout must be at least one second".to_string()
            ));
        }
        Ok(())
    }
}

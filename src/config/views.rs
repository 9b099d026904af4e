use super::traits::{validate_range, ConfigSection};
use crate::error::DashboardError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewsConfig {
    /// Rows kept for the bubble chart
    pub top_n: usize,
    pub preview_rows: usize,
    pub line_start_year: i32,
    pub line_end_year: i32,
    pub line_min: i64,
    pub line_max: i64,
}

impl Default for ViewsConfig {
    fn default() -> Self {
        Self {
            top_n: 50,
            preview_rows: 5,
            line_start_year: 2015,
            line_end_year: 2025,
            line_min: 50,
            line_max: 100,
        }
    }
}

impl ConfigSection for ViewsConfig {
    fn section_name() -> &'static str {
        "views"
    }

    fn validate(&self) -> Result<(), DashboardError> {
        if self.top_n == 0 {
            return Err(DashboardError::Configuration(
                "views.top_n must be at least 1".to_string()
            ));
        }
        if self.line_start_year > self.line_end_year {
            return Err(DashboardError::Configuration(format!(
                "views: line years {}..={} are reversed",
                self.line_start_year, self.line_end_year
            )));
        }
        validate_range(Self::section_name(), "line", self.line_min, self.line_max)
    }
}

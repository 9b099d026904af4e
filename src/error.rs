use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Derivation error: {0}")]
    Derivation(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("Config source error: {0}")]
    ConfigSource(#[from] config::ConfigError),
}

/// Reasons a data source could not be turned into a record table.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Network failure: {0}")]
    Network(String),

    #[error("Malformed CSV: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for LoadError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) if status == reqwest::StatusCode::NOT_FOUND => {
                LoadError::NotFound(err.to_string())
            }
            _ => LoadError::Network(err.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DashboardError>;

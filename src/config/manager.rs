use super::{
    source::SourceConfig,
    synthetic::SyntheticConfig,
    traits::ConfigSection,
    views::ViewsConfig,
};
use crate::error::DashboardError;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Optional config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "dashboard.toml";
/// Prefix for environment overrides, e.g. `ADMIN4__SOURCE__LOCATION`
pub const ENV_PREFIX: &str = "ADMIN4";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub synthetic: SyntheticConfig,
    pub views: ViewsConfig,
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), DashboardError> {
        self.source.validate()?;
        self.synthetic.validate()?;
        self.views.validate()?;
        Ok(())
    }

    pub fn to_toml_string(&self) -> Result<String, DashboardError> {
        toml::to_string_pretty(self)
            .map_err(|e| DashboardError::Configuration(format!("Failed to serialize: {}", e)))
    }
}

pub struct ConfigManager {
    config: AppConfig,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    /// Layer defaults, an optional TOML file and `ADMIN4__*` environment variables
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self, DashboardError> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path.as_ref()).required(false));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        let config: AppConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        log::debug!("Effective configuration: {:?}", config);

        Ok(Self { config })
    }

    pub fn get(&self) -> AppConfig {
        self.config.clone()
    }

    pub fn update<F>(&mut self, f: F) -> Result<(), DashboardError>
    where
        F: FnOnce(&mut AppConfig),
    {
        let mut candidate = self.config.clone();
        f(&mut candidate);
        candidate.validate()?;
        self.config = candidate;
        Ok(())
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

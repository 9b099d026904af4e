use crate::config::{AppConfig, ConfigManager};
use crate::ui::state::AppState;
use std::path::Path;

pub struct ConfigBridge;

impl ConfigBridge {
    /// Current config with the location typed into the UI
    pub fn to_app_config(state: &AppState) -> Result<AppConfig, String> {
        let mut config = state.config.clone();
        config.source.location = state.location_input.trim().to_string();
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Replace the UI config with one read from a TOML file (env overrides still apply)
    pub fn open_file(state: &mut AppState, path: &Path) -> Result<(), String> {
        let config = ConfigManager::load(Some(path)).map_err(|e| e.to_string())?.get();
        log::info!("Loaded configuration from {}", path.display());
        state.location_input = config.source.location.clone();
        state.config = config;
        Ok(())
    }

    pub fn to_toml(config: &AppConfig) -> String {
        config
            .to_toml_string()
            .unwrap_or_else(|e| format!("# {}", e))
    }
}

use super::services::{ConfigBridge, DataLoader};
use crate::config::AppConfig;
use crate::engines::RenderPass;

/// Central application state for the UI
pub struct AppState {
    pub config: AppConfig,
    /// Location being edited; applied on reload
    pub location_input: String,
    pub render: Option<RenderPass>,
    pub status_message: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            location_input: config.source.location.clone(),
            config,
            render: None,
            status_message: "Ready".to_string(),
        }
    }

    /// Run a fresh render pass against the edited location
    pub fn reload(&mut self) {
        let config = match ConfigBridge::to_app_config(self) {
            Ok(config) => config,
            Err(e) => {
                self.status_message = e;
                return;
            }
        };

        let pass = DataLoader::render(&config);
        self.status_message = if pass.loaded {
            format!("Loaded {} rows", pass.table.height())
        } else {
            "Load failed".to_string()
        };
        self.config = config;
        self.render = Some(pass);
    }
}

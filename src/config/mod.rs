pub mod traits;
pub mod source;
pub mod synthetic;
pub mod views;
pub mod manager;

pub use manager::{AppConfig, ConfigManager, DEFAULT_CONFIG_FILE};
pub use source::SourceConfig;
pub use synthetic::SyntheticConfig;
pub use views::ViewsConfig;

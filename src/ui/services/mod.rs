pub mod config_bridge;
pub mod data_loader;

pub use config_bridge::ConfigBridge;
pub use data_loader::DataLoader;

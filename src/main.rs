use admin4_dashboard::config::{ConfigManager, DEFAULT_CONFIG_FILE};
use admin4_dashboard::ui::DashboardApp;
use anyhow::Context;
use eframe::NativeOptions;

fn main() -> anyhow::Result<()> {
    // RUST_LOG controls verbosity
    env_logger::init();

    let config = ConfigManager::load(Some(DEFAULT_CONFIG_FILE))
        .context("Failed to load dashboard configuration")?
        .get();
    log::info!("Source: {}", config.source.location);

    let native_options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([1000.0, 600.0])
            .with_title("Admin4 Visualization"),
        ..Default::default()
    };

    eframe::run_native(
        "Admin4 Visualization",
        native_options,
        Box::new(move |cc| Ok(Box::new(DashboardApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("Dashboard window failed: {}", e))
}

use crate::config::AppConfig;
use crate::engines::{Pipeline, RenderPass};

pub struct DataLoader;

impl DataLoader {
    /// Load the configured source and build one render pass
    pub fn render(config: &AppConfig) -> RenderPass {
        let pass = Pipeline::new(config.clone()).run();
        log::info!(
            "Render pass for {}: {} notices, {} of {} views ready",
            pass.location,
            pass.notices.len(),
            pass.ready_views().count(),
            pass.views.len()
        );
        pass
    }
}

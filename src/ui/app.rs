use super::panels::{LeftPanel, MainPanel, RightPanel};
use super::state::AppState;
use crate::config::AppConfig;

pub struct DashboardApp {
    state: AppState,
    left_panel: LeftPanel,
    main_panel: MainPanel,
    right_panel: RightPanel,
}

impl DashboardApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: AppConfig) -> Self {
        let mut state = AppState::new(config);
        // Initial render pass against the configured source
        state.reload();

        Self {
            state,
            left_panel: LeftPanel::new(),
            main_panel: MainPanel::new(),
            right_panel: RightPanel::new(),
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("Admin4 Visualization");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(&self.state.status_message);
                });
            });
        });

        // Left Panel - Source, notices, preview
        egui::SidePanel::left("left_panel")
            .default_width(340.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.left_panel.show(ui, &mut self.state);
                });
            });

        // Right Panel - Summary tables
        egui::SidePanel::right("right_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    self.right_panel.show(ui, &self.state);
                });
            });

        // Central Panel - Charts
        egui::CentralPanel::default().show(ctx, |ui| {
            self.main_panel.show(ui, &self.state);
        });
    }
}

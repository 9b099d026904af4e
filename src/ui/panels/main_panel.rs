use crate::charts::ChartView;
use crate::ui::state::AppState;
use crate::ui::widgets::{ChartWidget, NoticeList};

pub struct MainPanel;

impl MainPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        let Some(pass) = &state.render else {
            ui.centered_and_justified(|ui| {
                ui.label("No data loaded. Choose a CSV source on the left.");
            });
            return;
        };

        egui::ScrollArea::vertical().show(ui, |ui| {
            for view in &pass.views {
                ui.heading(view.heading());
                match view {
                    ChartView::Ready(request) => ChartWidget::show(ui, request),
                    ChartView::Skipped { reason, .. } => NoticeList::warning(ui, reason),
                }
                ui.add_space(12.0);
                ui.separator();
            }
        });
    }
}

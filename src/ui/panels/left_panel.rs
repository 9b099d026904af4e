use crate::ui::services::ConfigBridge;
use crate::ui::state::AppState;
use crate::ui::widgets::{DataSelector, NoticeList, PreviewTable};

pub struct LeftPanel;

impl LeftPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &mut AppState) {
        ui.heading("Data Source");
        ui.separator();

        DataSelector::show(ui, state);

        ui.separator();

        if let Some(pass) = &state.render {
            NoticeList::show(ui, &pass.notices);

            ui.separator();

            ui.collapsing("Data Preview", |ui| match &pass.preview {
                Some(preview) => PreviewTable::show(ui, preview),
                None => {
                    ui.label("No data to display.");
                }
            });
        }

        ui.separator();

        ui.collapsing("Configuration", |ui| {
            if ui.button("Open Config...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("TOML Files", &["toml"])
                    .pick_file()
                {
                    match ConfigBridge::open_file(state, &path) {
                        Ok(()) => state.reload(),
                        Err(e) => state.status_message = e,
                    }
                }
            }
            ui.monospace(ConfigBridge::to_toml(&state.config));
        });
    }
}

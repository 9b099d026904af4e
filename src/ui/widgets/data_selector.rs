use crate::ui::state::AppState;

pub struct DataSelector;

impl DataSelector {
    pub fn show(ui: &mut egui::Ui, state: &mut AppState) {
        ui.label("Path or URL:");
        ui.add(egui::TextEdit::singleline(&mut state.location_input).desired_width(f32::INFINITY));

        ui.horizontal(|ui| {
            if ui.button("Select CSV File...").clicked() {
                if let Some(path) = rfd::FileDialog::new()
                    .add_filter("CSV Files", &["csv"])
                    .pick_file()
                {
                    state.location_input = path.display().to_string();
                    state.reload();
                }
            }

            if ui.button("Load").clicked() {
                state.reload();
            }
        });

        // Display current source info
        if let Some(pass) = &state.render {
            if let Some(preview) = &pass.preview {
                ui.label(format!("Source: {}", preview.metadata.location));
                ui.label(format!("Rows: {}", preview.metadata.num_rows));
                ui.label(format!("Columns: {}", preview.metadata.num_columns));
            }
        } else {
            ui.label("No data loaded");
        }
    }
}

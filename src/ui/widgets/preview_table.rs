use crate::data::DataPreview;

pub struct PreviewTable;

impl PreviewTable {
    pub fn show(ui: &mut egui::Ui, preview: &DataPreview) {
        ui.label(format!("Columns in dataset: {}", preview.metadata.columns.join(", ")));

        egui::ScrollArea::horizontal().id_salt("preview_scroll").show(ui, |ui| {
            egui::Grid::new("data_preview_grid")
                .striped(true)
                .show(ui, |ui| {
                    // Header
                    for col_name in &preview.metadata.columns {
                        ui.strong(col_name);
                    }
                    ui.end_row();

                    // Rows
                    for row in &preview.first_rows {
                        for cell in row {
                            ui.label(cell);
                        }
                        ui.end_row();
                    }
                });
        });

        ui.collapsing("Column types", |ui| {
            egui::Grid::new("column_stats_grid").striped(true).show(ui, |ui| {
                ui.strong("Column");
                ui.strong("Type");
                ui.strong("Nulls");
                ui.end_row();
                for stat in &preview.column_stats {
                    ui.label(&stat.name);
                    ui.label(&stat.dtype);
                    ui.label(format!("{}", stat.null_count));
                    ui.end_row();
                }
            });
        });
    }
}

use crate::data::ColumnRole;
use crate::types::AggregateTable;
use crate::ui::state::AppState;

pub struct RightPanel;

impl RightPanel {
    pub fn new() -> Self {
        Self
    }

    pub fn show(&mut self, ui: &mut egui::Ui, state: &AppState) {
        ui.heading("Summary");

        ui.separator();

        let Some(pass) = &state.render else {
            ui.label("Nothing loaded yet");
            return;
        };

        ui.group(|ui| {
            ui.horizontal(|ui| {
                ui.label("Rows:");
                ui.label(format!("{}", pass.table.height()));
            });
            ui.horizontal(|ui| {
                ui.label("Columns:");
                ui.label(format!("{}", pass.table.width()));
            });
            if let Some(view) = &pass.year_view {
                ui.horizontal(|ui| {
                    ui.label("Rows with a year:");
                    ui.label(format!("{}", view.height()));
                });
            }
        });

        ui.separator();

        ui.collapsing("Columns", |ui| {
            for role in ColumnRole::all() {
                let mark = if pass.schema.has(role) { "✔" } else { "✖" };
                ui.label(format!("{} {} ({:?})", mark, role.as_str(), role.kind()));
            }
        });

        ui.separator();

        ui.collapsing("Admin4 Areas per Province", |ui| {
            Self::counts_grid(ui, "province_counts", "Province", &pass.province_counts);
        });

        ui.collapsing("Records per Year", |ui| {
            Self::counts_grid(ui, "year_counts", "Year", &pass.year_counts);
        });
    }

    fn counts_grid(ui: &mut egui::Ui, id: &str, header: &str, table: &AggregateTable) {
        if table.is_empty() {
            ui.label("No values");
            return;
        }

        egui::Grid::new(id).striped(true).show(ui, |ui| {
            ui.strong(header);
            ui.strong("Count");
            ui.end_row();

            for row in &table.rows {
                ui.label(&row.category);
                ui.label(format!("{}", row.count));
                ui.end_row();
            }

            ui.strong("Total");
            ui.strong(format!("{}", table.total()));
            ui.end_row();
        });
    }
}

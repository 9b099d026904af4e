use crate::types::{Notice, NoticeLevel};
use egui::Color32;

const SUCCESS: Color32 = Color32::from_rgb(0x2e, 0x9e, 0x44);
const WARNING: Color32 = Color32::from_rgb(0xd0, 0x8c, 0x10);
const ERROR: Color32 = Color32::from_rgb(0xd0, 0x3b, 0x3b);

pub struct NoticeList;

impl NoticeList {
    pub fn show(ui: &mut egui::Ui, notices: &[Notice]) {
        for notice in notices {
            let (icon, color) = match notice.level {
                NoticeLevel::Success => ("✔", SUCCESS),
                NoticeLevel::Warning => ("⚠", WARNING),
                NoticeLevel::Error => ("✖", ERROR),
            };
            ui.colored_label(color, format!("{} {}", icon, notice.message));
        }
    }

    pub fn warning(ui: &mut egui::Ui, message: &str) {
        ui.colored_label(WARNING, format!("⚠ {}", message));
    }
}

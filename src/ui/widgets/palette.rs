use crate::charts::Palette;
use egui::Color32;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

const PLOTLY: [Color32; 10] = [
    Color32::from_rgb(0x63, 0x6e, 0xfa),
    Color32::from_rgb(0xef, 0x55, 0x3b),
    Color32::from_rgb(0x00, 0xcc, 0x96),
    Color32::from_rgb(0xab, 0x63, 0xfa),
    Color32::from_rgb(0xff, 0xa1, 0x5a),
    Color32::from_rgb(0x19, 0xd3, 0xf3),
    Color32::from_rgb(0xff, 0x66, 0x92),
    Color32::from_rgb(0xb6, 0xe8, 0x80),
    Color32::from_rgb(0xff, 0x97, 0xff),
    Color32::from_rgb(0xfe, 0xcb, 0x52),
];

const SET2: [Color32; 8] = [
    Color32::from_rgb(0x66, 0xc2, 0xa5),
    Color32::from_rgb(0xfc, 0x8d, 0x62),
    Color32::from_rgb(0x8d, 0xa0, 0xcb),
    Color32::from_rgb(0xe7, 0x8a, 0xc3),
    Color32::from_rgb(0xa6, 0xd8, 0x54),
    Color32::from_rgb(0xff, 0xd9, 0x2f),
    Color32::from_rgb(0xe5, 0xc4, 0x94),
    Color32::from_rgb(0xb3, 0xb3, 0xb3),
];

const PASTEL: [Color32; 11] = [
    Color32::from_rgb(102, 197, 204),
    Color32::from_rgb(246, 207, 113),
    Color32::from_rgb(248, 156, 116),
    Color32::from_rgb(220, 176, 242),
    Color32::from_rgb(135, 197, 95),
    Color32::from_rgb(158, 185, 243),
    Color32::from_rgb(254, 136, 177),
    Color32::from_rgb(201, 219, 116),
    Color32::from_rgb(139, 224, 164),
    Color32::from_rgb(180, 151, 231),
    Color32::from_rgb(179, 179, 179),
];

const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Colour for the `index`-th category
pub fn categorical(palette: Palette, index: usize) -> Color32 {
    match palette {
        Palette::Set2 => SET2[index % SET2.len()],
        Palette::Pastel => PASTEL[index % PASTEL.len()],
        Palette::Viridis => viridis((index % 10) as f64 / 9.0),
        Palette::Plotly | Palette::ByLabel => PLOTLY[index % PLOTLY.len()],
    }
}

/// Viridis colour for `t` in [0, 1]
pub fn viridis(t: f64) -> Color32 {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let f = scaled - i as f64;
    let (r0, g0, b0) = VIRIDIS[i];
    let (r1, g1, b1) = VIRIDIS[i + 1];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * f).round() as u8;
    Color32::from_rgb(mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

/// Stable colour for a label across frames and runs
pub fn for_label(label: &str) -> Color32 {
    let mut hasher = DefaultHasher::new();
    label.hash(&mut hasher);
    let idx = hasher.finish() as usize;
    let all: Vec<Color32> = PLOTLY.iter().chain(SET2.iter()).chain(PASTEL.iter()).copied().collect();
    all[idx % all.len()]
}

/// Blend towards white by `amount` in [0, 1]
pub fn lighten(color: Color32, amount: f32) -> Color32 {
    let amount = amount.clamp(0.0, 1.0);
    let mix = |c: u8| (c as f32 + (255.0 - c as f32) * amount).round() as u8;
    Color32::from_rgb(mix(color.r()), mix(color.g()), mix(color.b()))
}

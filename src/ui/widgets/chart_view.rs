use super::palette;
use crate::charts::pie::{arc_points, pie_slices, slice_at};
use crate::charts::treemap::{layout_hierarchy, squarify, LayoutRect};
use crate::charts::{ChartData, ChartKind, ChartRequest, Palette, PointDatum};
use crate::types::TreeNode;
use egui::{Align2, Color32, FontId, Pos2, Rect, Sense, Shape, Stroke, StrokeKind};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, Points};
use std::collections::BTreeMap;

const LABEL_FONT: f32 = 12.0;
const MAX_BUBBLE_RADIUS: f64 = 15.0;
const MAX_SCATTER_RADIUS: f64 = 10.0;
const MIN_MARKER_RADIUS: f64 = 3.0;

pub struct ChartWidget;

impl ChartWidget {
    pub fn show(ui: &mut egui::Ui, request: &ChartRequest) {
        ui.label(egui::RichText::new(&request.title).strong());

        if request.data.is_empty() {
            ui.label("No data for this chart.");
            return;
        }

        match (&request.kind, &request.data) {
            (ChartKind::Bar, ChartData::Categories(pairs)) => Self::bar(ui, request, pairs),
            (ChartKind::Pie, ChartData::Categories(pairs)) => Self::pie(ui, request, pairs),
            (ChartKind::Treemap, ChartData::Categories(pairs)) => Self::flat_treemap(ui, request, pairs),
            (ChartKind::Treemap, ChartData::Hierarchy(nodes)) => Self::nested_treemap(ui, request, nodes),
            (ChartKind::Bubble, ChartData::Points(points)) => Self::bubble(ui, request, points),
            (ChartKind::Scatter, ChartData::Points(points)) => Self::scatter(ui, request, points),
            (ChartKind::Line, ChartData::Series(series)) => Self::line(ui, request, series),
            (kind, _) => {
                log::warn!("Chart '{}' has data that does not fit a {:?} chart", request.id, kind);
                ui.label("Unsupported chart data");
            }
        }
    }

    fn plot(request: &ChartRequest) -> Plot<'static> {
        let mut plot = Plot::new(request.id.clone())
            .height(request.height)
            .allow_scroll(false);
        if request.show_legend {
            plot = plot.legend(Legend::default());
        }
        if let Some(label) = &request.x_label {
            plot = plot.x_axis_label(label.clone());
        }
        if let Some(label) = &request.y_label {
            plot = plot.y_axis_label(label.clone());
        }
        plot
    }

    fn bar(ui: &mut egui::Ui, request: &ChartRequest, pairs: &[(String, f64)]) {
        Self::plot(request).show(ui, |plot_ui| {
            for (i, (label, value)) in pairs.iter().enumerate() {
                let color = palette::categorical(request.palette, i);
                let bar = Bar::new(i as f64, *value).width(0.7).name(label.clone()).fill(color);
                plot_ui.bar_chart(BarChart::new(label.clone(), vec![bar]).color(color));
            }
        });
    }

    fn bubble(ui: &mut egui::Ui, request: &ChartRequest, points: &[PointDatum]) {
        let (min, max) = size_bounds(points);
        Self::plot(request).show_axes([true, false]).show(ui, |plot_ui| {
            for point in points {
                let t = normalize(point.size, min, max);
                plot_ui.points(
                    Points::new(point.label.clone(), vec![[point.x, point.y]])
                        .radius(marker_radius(point.size, min, max, MAX_BUBBLE_RADIUS))
                        .color(palette::viridis(t)),
                );
            }
        });
    }

    fn scatter(ui: &mut egui::Ui, request: &ChartRequest, points: &[PointDatum]) {
        // One series per label and whole-pixel radius
        let (min, max) = size_bounds(points);
        let mut groups: BTreeMap<(&str, u32), Vec<[f64; 2]>> = BTreeMap::new();
        for point in points {
            let radius = marker_radius(point.size, min, max, MAX_SCATTER_RADIUS).round() as u32;
            groups
                .entry((point.label.as_str(), radius))
                .or_default()
                .push([point.x, point.y]);
        }

        Self::plot(request).show(ui, |plot_ui| {
            for ((label, radius), coords) in groups {
                let color = match request.palette {
                    Palette::ByLabel => palette::for_label(label),
                    other => palette::categorical(other, 0),
                };
                plot_ui.points(Points::new(label.to_string(), coords).radius(radius as f32).color(color));
            }
        });
    }

    fn line(ui: &mut egui::Ui, request: &ChartRequest, series: &[[f64; 2]]) {
        let color = palette::categorical(request.palette, 0);
        Self::plot(request).show(ui, |plot_ui| {
            plot_ui.line(Line::new(request.title.clone(), series.to_vec()).color(color).width(2.0));
            plot_ui.points(Points::new(request.title.clone(), series.to_vec()).radius(4.0).color(color));
        });
    }

    fn pie(ui: &mut egui::Ui, request: &ChartRequest, pairs: &[(String, f64)]) {
        let values: Vec<f64> = pairs.iter().map(|(_, v)| *v).collect();
        let slices = pie_slices(&values);

        let (response, painter) =
            ui.allocate_painter(egui::vec2(ui.available_width(), request.height), Sense::hover());
        let rect = response.rect;
        let legend_width = (rect.width() * 0.35).min(260.0);
        let chart_rect = Rect::from_min_max(rect.min, egui::pos2(rect.max.x - legend_width, rect.max.y));
        let center = chart_rect.center();
        let radius = chart_rect.width().min(chart_rect.height()) * 0.45;

        for (i, slice) in slices.iter().enumerate() {
            let color = palette::categorical(request.palette, i);
            let angles = arc_points(slice, 0.05);
            for pair in angles.windows(2) {
                let triangle = vec![center, polar(center, radius, pair[0]), polar(center, radius, pair[1])];
                painter.add(Shape::convex_polygon(triangle, color, Stroke::NONE));
            }
            if slice.sweep > 0.0 {
                painter.line_segment(
                    [center, polar(center, radius, slice.start)],
                    Stroke::new(1.0, Color32::WHITE),
                );
            }
            if slice.fraction >= 0.04 {
                painter.text(
                    polar(center, radius * 0.65, slice.mid_angle()),
                    Align2::CENTER_CENTER,
                    format!("{:.1}%", slice.fraction * 100.0),
                    FontId::proportional(LABEL_FONT),
                    Color32::BLACK,
                );
            }
        }

        // Legend
        let text_color = ui.visuals().text_color();
        let mut y = rect.min.y + 8.0;
        let x = rect.max.x - legend_width + 8.0;
        for (i, (label, _)) in pairs.iter().enumerate() {
            if y + LABEL_FONT > rect.max.y {
                break;
            }
            let swatch = Rect::from_min_size(egui::pos2(x, y), egui::vec2(10.0, 10.0));
            painter.rect_filled(swatch, 0.0, palette::categorical(request.palette, i));
            painter.text(
                egui::pos2(x + 16.0, y - 1.0),
                Align2::LEFT_TOP,
                label,
                FontId::proportional(LABEL_FONT),
                text_color,
            );
            y += LABEL_FONT + 6.0;
        }

        if let Some(pos) = response.hover_pos() {
            let offset = pos - center;
            if offset.length() <= radius {
                let angle = (offset.y as f64).atan2(offset.x as f64);
                if let Some(i) = slice_at(&slices, angle) {
                    let (label, value) = &pairs[i];
                    response.on_hover_text(format!(
                        "{}: {} ({:.1}%)",
                        label,
                        value,
                        slices[i].fraction * 100.0
                    ));
                }
            }
        }
    }

    fn flat_treemap(ui: &mut egui::Ui, request: &ChartRequest, pairs: &[(String, f64)]) {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(ui.available_width(), request.height), Sense::hover());
        let bounds = response.rect;
        let values: Vec<f64> = pairs.iter().map(|(_, v)| *v).collect();
        let rects = squarify(&values, to_layout(bounds));

        let mut hovered = None;
        for (i, ((label, value), layout)) in pairs.iter().zip(&rects).enumerate() {
            let cell = to_egui(bounds, layout);
            painter.rect_filled(cell, 0.0, palette::categorical(request.palette, i));
            painter.rect_stroke(cell, 0.0, Stroke::new(1.0, Color32::WHITE), StrokeKind::Inside);
            cell_label(&painter, cell, &format!("{}\n{}", label, value));
            if response.hover_pos().is_some_and(|p| cell.contains(p)) {
                hovered = Some(format!("{}: {}", label, value));
            }
        }

        if let Some(text) = hovered {
            response.on_hover_text(text);
        }
    }

    fn nested_treemap(ui: &mut egui::Ui, request: &ChartRequest, nodes: &[TreeNode]) {
        let (response, painter) =
            ui.allocate_painter(egui::vec2(ui.available_width(), request.height), Sense::hover());
        let bounds = response.rect;
        let cells = layout_hierarchy(nodes, to_layout(bounds), 2.0, LABEL_FONT as f64 + 6.0);

        let mut hovered: Option<(usize, String)> = None;
        for cell in &cells {
            let rect = to_egui(bounds, &cell.rect);
            if rect.width() < 1.0 || rect.height() < 1.0 {
                continue;
            }
            let base = palette::categorical(request.palette, cell.root);
            painter.rect_filled(rect, 0.0, palette::lighten(base, 0.2 * cell.depth as f32));
            painter.rect_stroke(rect, 0.0, Stroke::new(1.0, Color32::WHITE), StrokeKind::Inside);
            cell_label(&painter, rect, &cell.label);

            if response.hover_pos().is_some_and(|p| rect.contains(p))
                && hovered.as_ref().map_or(true, |(depth, _)| cell.depth >= *depth)
            {
                hovered = Some((cell.depth, format!("{}: {}", cell.label, cell.count)));
            }
        }

        if let Some((_, text)) = hovered {
            response.on_hover_text(text);
        }
    }
}

fn polar(center: Pos2, radius: f32, angle: f64) -> Pos2 {
    egui::pos2(
        center.x + radius * angle.cos() as f32,
        center.y + radius * angle.sin() as f32,
    )
}

fn to_layout(rect: Rect) -> LayoutRect {
    LayoutRect::new(0.0, 0.0, rect.width() as f64, rect.height() as f64)
}

fn to_egui(bounds: Rect, layout: &LayoutRect) -> Rect {
    Rect::from_min_size(
        egui::pos2(bounds.min.x + layout.x as f32, bounds.min.y + layout.y as f32),
        egui::vec2(layout.width as f32, layout.height as f32),
    )
}

fn cell_label(painter: &egui::Painter, rect: Rect, text: &str) {
    if rect.width() < 24.0 || rect.height() < LABEL_FONT + 4.0 {
        return;
    }
    painter.with_clip_rect(rect).text(
        rect.min + egui::vec2(4.0, 2.0),
        Align2::LEFT_TOP,
        text,
        FontId::proportional(LABEL_FONT),
        Color32::BLACK,
    );
}

fn size_bounds(points: &[PointDatum]) -> (f64, f64) {
    points.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
        (lo.min(p.size), hi.max(p.size))
    })
}

/// Marker radius in points, growing linearly with `size` inside `[min, max]`
fn marker_radius(size: f64, min: f64, max: f64, max_radius: f64) -> f32 {
    let t = normalize(size, min, max);
    (MIN_MARKER_RADIUS + t * (max_radius - MIN_MARKER_RADIUS)) as f32
}

fn normalize(value: f64, min: f64, max: f64) -> f64 {
    if max > min {
        (value - min) / (max - min)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(size: f64) -> PointDatum {
        PointDatum { x: 0.0, y: 0.0, size, label: "a".to_string() }
    }

    #[test]
    fn test_marker_radius_follows_size() {
        let points = vec![point(1_000.0), point(50_000.0), point(99_999.0)];
        let (min, max) = size_bounds(&points);
        assert_eq!((min, max), (1_000.0, 99_999.0));

        let radii: Vec<f32> = points
            .iter()
            .map(|p| marker_radius(p.size, min, max, MAX_SCATTER_RADIUS))
            .collect();
        assert_eq!(radii[0], MIN_MARKER_RADIUS as f32);
        assert_eq!(radii[2], MAX_SCATTER_RADIUS as f32);
        assert!(radii[0] < radii[1] && radii[1] < radii[2]);
    }

    #[test]
    fn test_marker_radius_with_equal_sizes() {
        assert_eq!(marker_radius(5.0, 5.0, 5.0, MAX_BUBBLE_RADIUS), MAX_BUBBLE_RADIUS as f32);
    }
}

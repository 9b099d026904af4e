use std::f64::consts::{FRAC_PI_2, TAU};

/// Angular extent of one pie slice, radians, clockwise from 12 o'clock
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PieSlice {
    pub start: f64,
    pub sweep: f64,
    pub fraction: f64,
}

impl PieSlice {
    /// Angle halfway through the slice
    pub fn mid_angle(&self) -> f64 {
        self.start + self.sweep / 2.0
    }
}

/// Slices for `values`; non-positive values get an empty slice
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    let mut start = -FRAC_PI_2;

    values
        .iter()
        .map(|&v| {
            let fraction = if total > 0.0 && v > 0.0 { v / total } else { 0.0 };
            let slice = PieSlice {
                start,
                sweep: fraction * TAU,
                fraction,
            };
            start += slice.sweep;
            slice
        })
        .collect()
}

/// Points along a slice's arc, at most `max_step` radians apart, for
/// building convex wedge polygons
pub fn arc_points(slice: &PieSlice, max_step: f64) -> Vec<f64> {
    let steps = (slice.sweep / max_step).ceil().max(1.0) as usize;
    (0..=steps)
        .map(|i| slice.start + slice.sweep * i as f64 / steps as f64)
        .collect()
}

/// Index of the slice containing `angle` (radians, same convention as
/// [`pie_slices`], any turn)
pub fn slice_at(slices: &[PieSlice], angle: f64) -> Option<usize> {
    let mut a = angle;
    while a < -FRAC_PI_2 {
        a += TAU;
    }
    while a >= -FRAC_PI_2 + TAU {
        a -= TAU;
    }
    slices
        .iter()
        .position(|s| s.sweep > 0.0 && a >= s.start && a < s.start + s.sweep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sweeps_cover_full_turn() {
        let slices = pie_slices(&[2.0, 1.0, 1.0]);
        let total: f64 = slices.iter().map(|s| s.sweep).sum();
        assert!((total - TAU).abs() < 1e-9);
        assert!((slices[0].fraction - 0.5).abs() < 1e-9);
        assert!((slices[1].start - (slices[0].start + slices[0].sweep)).abs() < 1e-9);
    }

    #[test]
    fn test_empty_and_zero_values() {
        assert!(pie_slices(&[]).is_empty());
        let slices = pie_slices(&[0.0, 0.0]);
        assert!(slices.iter().all(|s| s.sweep == 0.0));
    }

    #[test]
    fn test_slice_at_wraps_angles() {
        let slices = pie_slices(&[1.0, 1.0, 2.0]);
        // Top of the circle, just clockwise
        assert_eq!(slice_at(&slices, -FRAC_PI_2 + 0.01), Some(0));
        // Pointing right is a quarter turn in: start of the second slice
        assert_eq!(slice_at(&slices, 0.0), Some(1));
        // Pointing down is half a turn in: start of the third slice
        assert_eq!(slice_at(&slices, FRAC_PI_2 + 0.01), Some(2));
        // atan2 returns (-PI, PI]; left side lands in the last slice
        assert_eq!(slice_at(&slices, -std::f64::consts::PI + 0.01), Some(2));
    }

    #[test]
    fn test_arc_points_bounded_step() {
        let slice = PieSlice { start: 0.0, sweep: 1.0, fraction: 0.0 };
        let points = arc_points(&slice, 0.3);
        assert_eq!(points.len(), 5);
        assert_eq!(points[0], 0.0);
        assert!((points[4] - 1.0).abs() < 1e-12);
    }
}

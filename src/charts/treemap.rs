//! Squarified treemap layout.
//!
//! Rows of rectangles are laid along the shorter side of the remaining
//! space, growing a row while that keeps the worst aspect ratio from
//! getting worse.

use crate::types::TreeNode;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl LayoutRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    fn shorter_side(&self) -> f64 {
        self.width.min(self.height)
    }

    fn empty_at(&self) -> Self {
        Self::new(self.x, self.y, 0.0, 0.0)
    }

    /// Shrink by `top` at the top edge and `pad` elsewhere; never negative
    pub fn inset(&self, pad: f64, top: f64) -> Self {
        let width = (self.width - 2.0 * pad).max(0.0);
        let height = (self.height - pad - top).max(0.0);
        Self::new(self.x + pad, self.y + top, width, height)
    }
}

/// One rectangle per value, in input order. Values should be sorted
/// descending for the best aspect ratios; non-positive values get an
/// empty rectangle.
pub fn squarify(values: &[f64], bounds: LayoutRect) -> Vec<LayoutRect> {
    let mut out = vec![bounds.empty_at(); values.len()];
    let total: f64 = values.iter().filter(|v| **v > 0.0).sum();
    if total <= 0.0 || bounds.area() <= 0.0 {
        return out;
    }

    let scale = bounds.area() / total;
    let items: Vec<(usize, f64)> = values
        .iter()
        .enumerate()
        .filter(|(_, v)| **v > 0.0)
        .map(|(i, v)| (i, v * scale))
        .collect();

    let mut remaining = bounds;
    let mut start = 0;
    while start < items.len() {
        let side = remaining.shorter_side();
        let mut end = start + 1;
        let mut best = worst_ratio(&items[start..end], side);
        while end < items.len() {
            let candidate = worst_ratio(&items[start..=end], side);
            if candidate > best {
                break;
            }
            best = candidate;
            end += 1;
        }
        remaining = lay_row(&items[start..end], remaining, &mut out);
        start = end;
    }

    out
}

fn worst_ratio(row: &[(usize, f64)], side: f64) -> f64 {
    let sum: f64 = row.iter().map(|(_, a)| a).sum();
    let (min, max) = row
        .iter()
        .fold((f64::INFINITY, 0.0f64), |(lo, hi), (_, a)| (lo.min(*a), hi.max(*a)));
    let sum_sq = sum * sum;
    let side_sq = side * side;
    if sum_sq == 0.0 || min == 0.0 {
        return f64::INFINITY;
    }
    (side_sq * max / sum_sq).max(sum_sq / (side_sq * min))
}

/// Place `row` against the shorter side of `rect` and return what is left
fn lay_row(row: &[(usize, f64)], rect: LayoutRect, out: &mut [LayoutRect]) -> LayoutRect {
    let sum: f64 = row.iter().map(|(_, a)| a).sum();

    if rect.width >= rect.height {
        let thickness = if rect.height > 0.0 { sum / rect.height } else { 0.0 };
        let mut y = rect.y;
        for &(i, a) in row {
            let h = if thickness > 0.0 { a / thickness } else { 0.0 };
            out[i] = LayoutRect::new(rect.x, y, thickness, h);
            y += h;
        }
        LayoutRect::new(
            rect.x + thickness,
            rect.y,
            (rect.width - thickness).max(0.0),
            rect.height,
        )
    } else {
        let thickness = if rect.width > 0.0 { sum / rect.width } else { 0.0 };
        let mut x = rect.x;
        for &(i, a) in row {
            let w = if thickness > 0.0 { a / thickness } else { 0.0 };
            out[i] = LayoutRect::new(x, rect.y, w, thickness);
            x += w;
        }
        LayoutRect::new(
            rect.x,
            rect.y + thickness,
            rect.width,
            (rect.height - thickness).max(0.0),
        )
    }
}

/// Laid-out node of a nested treemap
#[derive(Debug, Clone, PartialEq)]
pub struct TreemapCell {
    pub label: String,
    pub count: usize,
    pub depth: usize,
    /// Index of the top-level ancestor, used for colouring
    pub root: usize,
    pub rect: LayoutRect,
    pub is_leaf: bool,
}

/// Lay out `nodes` and all their descendants. Each parent keeps a
/// `header` strip at the top for its label and `pad` around its children.
pub fn layout_hierarchy(nodes: &[TreeNode], bounds: LayoutRect, pad: f64, header: f64) -> Vec<TreemapCell> {
    let mut cells = Vec::new();
    layout_level(nodes, bounds, pad, header, 0, None, &mut cells);
    cells
}

fn layout_level(
    nodes: &[TreeNode],
    bounds: LayoutRect,
    pad: f64,
    header: f64,
    depth: usize,
    root: Option<usize>,
    cells: &mut Vec<TreemapCell>,
) {
    let values: Vec<f64> = nodes.iter().map(|n| n.count as f64).collect();
    let rects = squarify(&values, bounds);

    for (i, (node, rect)) in nodes.iter().zip(rects).enumerate() {
        let root = root.unwrap_or(i);
        cells.push(TreemapCell {
            label: node.label.clone(),
            count: node.count,
            depth,
            root,
            rect,
            is_leaf: node.is_leaf(),
        });
        if !node.is_leaf() {
            layout_level(&node.children, rect.inset(pad, header), pad, header, depth + 1, Some(root), cells);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_areas_proportional_and_tiled() {
        let bounds = LayoutRect::new(0.0, 0.0, 600.0, 400.0);
        let values = [6.0, 6.0, 4.0, 3.0, 2.0, 2.0, 1.0];
        let rects = squarify(&values, bounds);

        let total: f64 = values.iter().sum();
        for (v, r) in values.iter().zip(&rects) {
            assert!(approx(r.area(), bounds.area() * v / total));
            assert!(r.x >= -1e-6 && r.y >= -1e-6);
            assert!(r.x + r.width <= 600.0 + 1e-6);
            assert!(r.y + r.height <= 400.0 + 1e-6);
        }

        let covered: f64 = rects.iter().map(|r| r.area()).sum();
        assert!(approx(covered, bounds.area()));
    }

    #[test]
    fn test_zero_values_get_empty_rects() {
        let rects = squarify(&[0.0, 5.0], LayoutRect::new(10.0, 10.0, 100.0, 50.0));
        assert_eq!(rects[0].area(), 0.0);
        assert!(approx(rects[1].area(), 5000.0));
        assert!(squarify(&[], LayoutRect::new(0.0, 0.0, 1.0, 1.0)).is_empty());
    }

    #[test]
    fn test_hierarchy_children_inside_parent() {
        let mut north = TreeNode::new("North");
        north.count = 3;
        let mut n1 = TreeNode::new("N1");
        n1.count = 2;
        let mut n2 = TreeNode::new("N2");
        n2.count = 1;
        north.children = vec![n1, n2];
        let mut south = TreeNode::new("South");
        south.count = 1;

        let cells = layout_hierarchy(&[north, south], LayoutRect::new(0.0, 0.0, 400.0, 300.0), 2.0, 16.0);
        assert_eq!(cells.len(), 4);

        let parent = &cells[0];
        assert_eq!(parent.label, "North");
        assert!(!parent.is_leaf);
        for child in cells.iter().filter(|c| c.depth == 1) {
            assert_eq!(child.root, 0);
            assert!(child.rect.x >= parent.rect.x - 1e-6);
            assert!(child.rect.y >= parent.rect.y + 16.0 - 1e-6);
            assert!(child.rect.x + child.rect.width <= parent.rect.x + parent.rect.width + 1e-6);
        }
        assert_eq!(cells[3].label, "South");
        assert_eq!(cells[3].root, 1);
    }
}

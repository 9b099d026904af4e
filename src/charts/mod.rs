mod builders;
pub mod pie;
pub mod treemap;

pub use builders::{
    bubble_chart, bubble_heading, dummy_line_chart, hierarchy_treemap, province_bar_chart,
    province_pie_chart, province_treemap, records_per_year_chart, scatter_chart, BAR_HEADING,
    DUMMY_LINE_HEADING, HIERARCHY_HEADING, PIE_HEADING, SCATTER_HEADING, TREEMAP_HEADING,
    YEAR_LINE_HEADING,
};

use crate::types::TreeNode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartKind {
    Bar,
    Pie,
    Treemap,
    Bubble,
    Scatter,
    Line,
}

/// Named colour schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Palette {
    /// One colour per category, plotly default order
    Plotly,
    Set2,
    Pastel,
    /// Continuous scale driven by the value
    Viridis,
    /// Colour derived from each point's label
    ByLabel,
}

/// A single marker of a bubble or scatter chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointDatum {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartData {
    /// (label, value) pairs for bar, pie and flat treemap charts
    Categories(Vec<(String, f64)>),
    Points(Vec<PointDatum>),
    /// (x, y) points joined in order
    Series(Vec<[f64; 2]>),
    Hierarchy(Vec<TreeNode>),
}

impl ChartData {
    pub fn len(&self) -> usize {
        match self {
            Self::Categories(c) => c.len(),
            Self::Points(p) => p.len(),
            Self::Series(s) => s.len(),
            Self::Hierarchy(h) => h.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Declarative description of one chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub id: String,
    pub heading: String,
    pub title: String,
    pub kind: ChartKind,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub palette: Palette,
    pub height: f32,
    pub show_legend: bool,
    pub data: ChartData,
}

/// A chart slot on the page: either drawable or skipped with a reason
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ChartView {
    Ready(ChartRequest),
    Skipped { heading: String, reason: String },
}

impl ChartView {
    pub fn heading(&self) -> &str {
        match self {
            Self::Ready(request) => &request.heading,
            Self::Skipped { heading, .. } => heading,
        }
    }

    pub fn request(&self) -> Option<&ChartRequest> {
        match self {
            Self::Ready(request) => Some(request),
            Self::Skipped { .. } => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

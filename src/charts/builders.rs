use super::{ChartData, ChartKind, ChartRequest, Palette, PointDatum};
use crate::engines::selection::rank_first;
use crate::error::Result;
use crate::types::{AggregateTable, TreeNode};
use polars::prelude::*;

pub const BAR_HEADING: &str = "Distribution of Admin4 Areas by Province (Bar Chart)";
pub const PIE_HEADING: &str = "Distribution of Admin4 Areas (Pie Chart)";
pub const TREEMAP_HEADING: &str = "Treemap of Admin4 Areas by Province";
pub const SCATTER_HEADING: &str = "Scatter Plot of Simulated Area vs Population by District";
pub const DUMMY_LINE_HEADING: &str = "Dummy Line Chart Example";
pub const YEAR_LINE_HEADING: &str = "Records per Year";
pub const HIERARCHY_HEADING: &str = "Treemap of Administrative Hierarchy";

pub fn bubble_heading(n: usize) -> String {
    format!("Districts Bubble Chart (Top {} by Simulated Area)", n)
}

fn request(id: &str, heading: &str, title: &str, kind: ChartKind, data: ChartData) -> ChartRequest {
    ChartRequest {
        id: id.to_string(),
        heading: heading.to_string(),
        title: title.to_string(),
        kind,
        x_label: None,
        y_label: None,
        palette: Palette::Plotly,
        height: 450.0,
        show_legend: false,
        data,
    }
}

pub fn province_bar_chart(counts: &AggregateTable) -> ChartRequest {
    ChartRequest {
        x_label: Some("Province".to_string()),
        y_label: Some("Count of Admin4 Areas".to_string()),
        palette: Palette::Set2,
        height: 600.0,
        show_legend: true,
        ..request(
            "province_bar",
            BAR_HEADING,
            "Distribution of Admin4 Areas per Province (Bar Chart)",
            ChartKind::Bar,
            ChartData::Categories(counts.as_pairs()),
        )
    }
}

pub fn province_pie_chart(counts: &AggregateTable) -> ChartRequest {
    ChartRequest {
        show_legend: true,
        ..request(
            "province_pie",
            PIE_HEADING,
            "Distribution of Admin4 Areas per Province",
            ChartKind::Pie,
            ChartData::Categories(counts.as_pairs()),
        )
    }
}

pub fn province_treemap(counts: &AggregateTable) -> ChartRequest {
    request(
        "province_treemap",
        TREEMAP_HEADING,
        "Treemap of Admin4 Areas by Province",
        ChartKind::Treemap,
        ChartData::Categories(counts.as_pairs()),
    )
}

/// Bubbles for the `top` rows: x and size follow the value, y is its rank.
/// Titles name the requested `top_n`, not the number of rows that made it.
pub fn bubble_chart(
    top: &DataFrame,
    label_column: &str,
    value_column: &str,
    top_n: usize,
) -> Result<ChartRequest> {
    let values: Vec<f64> = top
        .column(value_column)?
        .cast(&DataType::Float64)?
        .f64()?
        .into_iter()
        .map(|v| v.unwrap_or(0.0))
        .collect();
    let labels = top.column(label_column)?.cast(&DataType::String)?;
    let labels = labels.str()?;
    let ranks = rank_first(&values);

    let points = values
        .iter()
        .zip(ranks)
        .enumerate()
        .map(|(i, (&value, rank))| PointDatum {
            x: value,
            y: rank as f64,
            size: value,
            label: labels.get(i).unwrap_or_default().to_string(),
        })
        .collect();

    Ok(ChartRequest {
        x_label: Some("Simulated Area".to_string()),
        palette: Palette::Viridis,
        height: 700.0,
        ..request(
            "area_bubble",
            &bubble_heading(top_n),
            &format!("Top {} Districts Bubble Chart (Simulated Area)", top_n),
            ChartKind::Bubble,
            ChartData::Points(points),
        )
    })
}

/// One marker per row with both coordinates present, coloured by label
pub fn scatter_chart(
    df: &DataFrame,
    label_column: &str,
    x_column: &str,
    y_column: &str,
) -> Result<ChartRequest> {
    let xs = df.column(x_column)?.cast(&DataType::Float64)?;
    let ys = df.column(y_column)?.cast(&DataType::Float64)?;
    let labels = df.column(label_column)?.cast(&DataType::String)?;
    let labels = labels.str()?;

    let points = xs
        .f64()?
        .into_iter()
        .zip(ys.f64()?.into_iter())
        .enumerate()
        .filter_map(|(i, (x, y))| {
            Some(PointDatum {
                x: x?,
                y: y?,
                size: y?,
                label: labels.get(i).unwrap_or_default().to_string(),
            })
        })
        .collect();

    Ok(ChartRequest {
        x_label: Some("Simulated Area (km²)".to_string()),
        y_label: Some("Simulated Population".to_string()),
        palette: Palette::ByLabel,
        height: 600.0,
        ..request(
            "area_population_scatter",
            SCATTER_HEADING,
            "Simulated Area vs Population Colored by District",
            ChartKind::Scatter,
            ChartData::Points(points),
        )
    })
}

/// Line over consecutive years starting at `start_year`
pub fn dummy_line_chart(start_year: i32, values: &[i64]) -> ChartRequest {
    let series = values
        .iter()
        .enumerate()
        .map(|(i, &v)| [(start_year as f64) + i as f64, v as f64])
        .collect();

    ChartRequest {
        x_label: Some("Year".to_string()),
        y_label: Some("Admin4_Count".to_string()),
        ..request(
            "dummy_line",
            DUMMY_LINE_HEADING,
            "Dummy Admin4 Growth Over Time",
            ChartKind::Line,
            ChartData::Series(series),
        )
    }
}

/// Timeline of per-year counts; categories that are not years are dropped
pub fn records_per_year_chart(counts: &AggregateTable) -> ChartRequest {
    let series = counts
        .rows
        .iter()
        .filter_map(|row| row.category.parse::<f64>().ok().map(|year| [year, row.count as f64]))
        .collect();

    ChartRequest {
        x_label: Some("Year".to_string()),
        y_label: Some("Records".to_string()),
        ..request(
            "records_per_year",
            YEAR_LINE_HEADING,
            "Records per Year (parsed from Record_Date)",
            ChartKind::Line,
            ChartData::Series(series),
        )
    }
}

pub fn hierarchy_treemap(nodes: Vec<TreeNode>) -> ChartRequest {
    ChartRequest {
        palette: Palette::Pastel,
        height: 700.0,
        ..request(
            "admin_hierarchy",
            HIERARCHY_HEADING,
            "Treemap: Province > District > Admin4 Area",
            ChartKind::Treemap,
            ChartData::Hierarchy(nodes),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CategoryCount;
    use polars::df;

    fn counts() -> AggregateTable {
        AggregateTable {
            column: "Admin1_Name_En".to_string(),
            rows: vec![
                CategoryCount { category: "A".to_string(), count: 2 },
                CategoryCount { category: "B".to_string(), count: 1 },
            ],
        }
    }

    #[test]
    fn test_province_charts_share_counts() {
        let bar = province_bar_chart(&counts());
        let pie = province_pie_chart(&counts());
        assert_eq!(bar.kind, ChartKind::Bar);
        assert_eq!(pie.kind, ChartKind::Pie);
        assert_eq!(bar.data, pie.data);
        assert_eq!(bar.palette, Palette::Set2);
        assert_eq!(bar.y_label.as_deref(), Some("Count of Admin4 Areas"));
    }

    #[test]
    fn test_bubble_positions_are_ranks() {
        let top = df! {
            "Admin4_Name_En" => &["big", "mid", "small"],
            "Simulated_Area" => &[900i64, 500, 100],
        }
        .unwrap();

        let chart = bubble_chart(&top, "Admin4_Name_En", "Simulated_Area", 50).unwrap();
        let ChartData::Points(points) = &chart.data else {
            panic!("expected points");
        };
        assert_eq!(points.len(), 3);
        assert_eq!(points[0].label, "big");
        assert_eq!(points[0].y, 3.0);
        assert_eq!(points[2].y, 1.0);
        assert_eq!(points[1].size, 500.0);
        assert_eq!(chart.heading, "Districts Bubble Chart (Top 50 by Simulated Area)");
        assert_eq!(chart.heading, bubble_heading(50));
    }

    #[test]
    fn test_scatter_skips_incomplete_rows() {
        let df = df! {
            "Admin4_Name_En" => &["a", "b"],
            "Simulated_Area" => &[Some(10i64), None],
            "Simulated_Population" => &[2000i64, 3000],
        }
        .unwrap();

        let chart = scatter_chart(&df, "Admin4_Name_En", "Simulated_Area", "Simulated_Population").unwrap();
        assert_eq!(chart.data.len(), 1);
    }

    #[test]
    fn test_dummy_line_years() {
        let chart = dummy_line_chart(2015, &[60, 70, 80]);
        assert_eq!(
            chart.data,
            ChartData::Series(vec![[2015.0, 60.0], [2016.0, 70.0], [2017.0, 80.0]])
        );
    }

    #[test]
    fn test_records_per_year_series() {
        let table = AggregateTable {
            column: "Year".to_string(),
            rows: vec![
                CategoryCount { category: "2019".to_string(), count: 4 },
                CategoryCount { category: "2020".to_string(), count: 1 },
            ],
        };
        let chart = records_per_year_chart(&table);
        assert_eq!(chart.data, ChartData::Series(vec![[2019.0, 4.0], [2020.0, 1.0]]));
    }
}

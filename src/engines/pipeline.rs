use crate::charts::{self, ChartRequest, ChartView};
use crate::config::AppConfig;
use crate::data::connectors::{
    ColumnRole, CsvConnector, DataPreview, ResolvedSchema, SchemaValidator,
    SIMULATED_AREA_COLUMN, SIMULATED_POPULATION_COLUMN, YEAR_COLUMN,
};
use crate::engines::{aggregate, derive, selection};
use crate::error::{LoadError, Result};
use crate::types::{AggregateTable, Notice};
use polars::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

const NO_DATA: &str = "No data loaded.";

/// Everything one page render needs, built from a single load
#[derive(Debug, Clone)]
pub struct RenderPass {
    pub location: String,
    pub loaded: bool,
    /// Record table with derived columns; rows with an unparsed Year are kept
    pub table: DataFrame,
    /// Rows with a parsed Year, when a record date column exists
    pub year_view: Option<DataFrame>,
    pub schema: ResolvedSchema,
    pub preview: Option<DataPreview>,
    pub notices: Vec<Notice>,
    pub province_counts: AggregateTable,
    pub year_counts: AggregateTable,
    pub views: Vec<ChartView>,
}

impl RenderPass {
    fn empty(location: &str) -> Self {
        Self {
            location: location.to_string(),
            loaded: false,
            table: DataFrame::empty(),
            year_view: None,
            schema: ResolvedSchema::default(),
            preview: None,
            notices: Vec::new(),
            province_counts: AggregateTable::empty(ColumnRole::Province.as_str()),
            year_counts: AggregateTable::empty(YEAR_COLUMN),
            views: Vec::new(),
        }
    }

    pub fn ready_views(&self) -> impl Iterator<Item = &ChartRequest> {
        self.views.iter().filter_map(|v| v.request())
    }
}

/// load → validate → derive → aggregate → chart requests
pub struct Pipeline {
    config: AppConfig,
}

impl Pipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Load the configured source and build every view.
    ///
    /// The dummy line chart draws from a fresh unseeded generator each
    /// time; the synthetic columns always use the configured seed.
    pub fn run(&self) -> RenderPass {
        let location = self.config.source.location.clone();
        let timeout = Duration::from_secs(self.config.source.timeout_secs);
        let loaded = CsvConnector::load(&location, timeout);
        self.render(&location, loaded, &mut StdRng::from_entropy())
    }

    /// Build a render pass from an already attempted load
    pub fn render<R: Rng + ?Sized>(
        &self,
        location: &str,
        loaded: std::result::Result<DataFrame, LoadError>,
        line_rng: &mut R,
    ) -> RenderPass {
        let mut pass = RenderPass::empty(location);

        let table = match loaded {
            Ok(df) => {
                pass.loaded = true;
                pass.notices.push(Notice::success(format!(
                    "CSV file loaded successfully! ({} rows, {} columns)",
                    df.height(),
                    df.width()
                )));
                df
            }
            Err(e) => {
                log::error!("Failed to load {}: {}", location, e);
                pass.notices.push(Notice::error(format!("Error loading CSV: {}", e)));
                DataFrame::empty()
            }
        };

        if table.height() == 0 {
            pass.notices.push(Notice::warning("No data to display."));
            pass.views = self.views_without_data(line_rng);
            return pass;
        }

        match CsvConnector::create_preview(location, &table, self.config.views.preview_rows) {
            Ok(preview) => pass.preview = Some(preview),
            Err(e) => log::warn!("Could not build preview: {}", e),
        }

        let (table, schema) = match SchemaValidator::resolve(&table) {
            Ok(resolved) => resolved,
            Err(e) => {
                pass.notices.push(Notice::error(format!("Schema validation failed: {}", e)));
                (table, ResolvedSchema::default())
            }
        };
        pass.notices.extend(SchemaValidator::warnings(&schema));
        for (column, nulls) in SchemaValidator::check_nulls(&table) {
            log::warn!("Column '{}' has {} null values", column, nulls);
        }

        let (table, year_view) = self.derive_year(table, &schema, &mut pass.notices);
        let table = self.derive_synthetic(table, &schema, &mut pass.notices);

        if let Some(province) = schema.column(ColumnRole::Province) {
            match aggregate::value_counts(&table, province) {
                Ok(counts) => pass.province_counts = counts,
                Err(e) => pass.notices.push(Notice::warning(format!("Province counts failed: {}", e))),
            }
        }
        if let Some(view) = &year_view {
            match aggregate::counts_by_year(view, YEAR_COLUMN) {
                Ok(counts) => pass.year_counts = counts,
                Err(e) => pass.notices.push(Notice::warning(format!("Year counts failed: {}", e))),
            }
        }

        pass.views = self.build_views(&table, &schema, &pass.province_counts, &pass.year_counts, line_rng);
        for view in &pass.views {
            if let ChartView::Skipped { heading, reason } = view {
                log::info!("Skipping '{}': {}", heading, reason);
            }
        }

        pass.table = table;
        pass.year_view = year_view;
        pass.schema = schema;
        pass
    }

    fn derive_year(
        &self,
        table: DataFrame,
        schema: &ResolvedSchema,
        notices: &mut Vec<Notice>,
    ) -> (DataFrame, Option<DataFrame>) {
        let Some(date_column) = schema.column(ColumnRole::RecordDate) else {
            notices.push(Notice::warning(format!(
                "'{}' column not found, skipping Year extraction.",
                ColumnRole::RecordDate.as_str()
            )));
            return (table, None);
        };

        let extracted = derive::with_year(&table, date_column).and_then(|extraction| {
            let view = derive::year_view(&extraction.table)?;
            Ok((extraction.table, view))
        });

        match extracted {
            Ok((with_year, view)) => (with_year, Some(view)),
            Err(e) => {
                notices.push(Notice::warning(format!("Year extraction failed: {}", e)));
                (table, None)
            }
        }
    }

    fn derive_synthetic(
        &self,
        table: DataFrame,
        schema: &ResolvedSchema,
        notices: &mut Vec<Notice>,
    ) -> DataFrame {
        let synthetic = &self.config.synthetic;
        let mut rng = StdRng::seed_from_u64(synthetic.seed);

        let table = if schema.has(ColumnRole::Area) {
            match derive::with_synthetic_column(
                &table,
                SIMULATED_AREA_COLUMN,
                synthetic.area_min..synthetic.area_max,
                &mut rng,
            ) {
                Ok(t) => t,
                Err(e) => {
                    notices.push(Notice::warning(format!("Simulated area not generated: {}", e)));
                    table
                }
            }
        } else {
            table
        };

        match derive::with_synthetic_column(
            &table,
            SIMULATED_POPULATION_COLUMN,
            synthetic.population_min..synthetic.population_max,
            &mut rng,
        ) {
            Ok(t) => t,
            Err(e) => {
                notices.push(Notice::warning(format!("Simulated population not generated: {}", e)));
                table
            }
        }
    }

    fn build_views<R: Rng + ?Sized>(
        &self,
        table: &DataFrame,
        schema: &ResolvedSchema,
        province_counts: &AggregateTable,
        year_counts: &AggregateTable,
        line_rng: &mut R,
    ) -> Vec<ChartView> {
        let views = &self.config.views;
        let province = ColumnRole::Province.as_str();
        let area = ColumnRole::Area.as_str();
        let mut out = Vec::with_capacity(8);

        let province_reason = if schema.has(ColumnRole::Province) {
            "No province values to count.".to_string()
        } else {
            format!("'{}' column not found.", province)
        };
        let province_ready = !province_counts.is_empty();
        out.push(when(province_ready, charts::BAR_HEADING, &province_reason, || {
            Ok(charts::province_bar_chart(province_counts))
        }));
        out.push(when(province_ready, charts::PIE_HEADING, &province_reason, || {
            Ok(charts::province_pie_chart(province_counts))
        }));
        out.push(when(province_ready, charts::TREEMAP_HEADING, &province_reason, || {
            Ok(charts::province_treemap(province_counts))
        }));

        let has_area = schema.has(ColumnRole::Area) && has_column(table, SIMULATED_AREA_COLUMN);
        out.push(when(
            has_area,
            &charts::bubble_heading(views.top_n),
            &format!("'{}' column not found for the Bubble Chart.", area),
            || {
                let top = selection::nlargest(table, SIMULATED_AREA_COLUMN, views.top_n)?;
                charts::bubble_chart(&top, area, SIMULATED_AREA_COLUMN, views.top_n)
            },
        ));

        out.push(when(
            has_area && has_column(table, SIMULATED_POPULATION_COLUMN),
            charts::SCATTER_HEADING,
            &format!("'{}' column not found for the Scatter Plot.", area),
            || charts::scatter_chart(table, area, SIMULATED_AREA_COLUMN, SIMULATED_POPULATION_COLUMN),
        ));

        out.push(self.dummy_line(line_rng));

        let year_reason = if schema.has(ColumnRole::RecordDate) {
            format!("No parseable '{}' values.", ColumnRole::RecordDate.as_str())
        } else {
            format!("'{}' column not found.", ColumnRole::RecordDate.as_str())
        };
        out.push(when(!year_counts.is_empty(), charts::YEAR_LINE_HEADING, &year_reason, || {
            Ok(charts::records_per_year_chart(year_counts))
        }));

        let levels = [ColumnRole::Province, ColumnRole::District, ColumnRole::Area];
        out.push(when(
            schema.has_all(&levels),
            charts::HIERARCHY_HEADING,
            &format!(
                "Some required columns ('{}', '{}', '{}') are missing for the Treemap.",
                levels[0].as_str(),
                levels[1].as_str(),
                levels[2].as_str()
            ),
            || {
                let names: Vec<&str> = levels.iter().map(|r| r.as_str()).collect();
                Ok(charts::hierarchy_treemap(aggregate::hierarchy(table, &names)?))
            },
        ));

        out
    }

    fn dummy_line<R: Rng + ?Sized>(&self, rng: &mut R) -> ChartView {
        let views = &self.config.views;
        let years = (views.line_end_year - views.line_start_year + 1).max(0) as usize;
        when(true, charts::DUMMY_LINE_HEADING, "", || {
            let values = derive::random_values(rng, years, views.line_min..views.line_max)?;
            Ok(charts::dummy_line_chart(views.line_start_year, &values))
        })
    }

    /// Only the data-independent line chart survives an empty table
    fn views_without_data<R: Rng + ?Sized>(&self, line_rng: &mut R) -> Vec<ChartView> {
        let top_n = self.config.views.top_n;
        let mut out: Vec<ChartView> = [
            charts::BAR_HEADING.to_string(),
            charts::PIE_HEADING.to_string(),
            charts::TREEMAP_HEADING.to_string(),
            charts::bubble_heading(top_n),
            charts::SCATTER_HEADING.to_string(),
        ]
        .into_iter()
        .map(|heading| skipped(&heading, NO_DATA))
        .collect();

        out.push(self.dummy_line(line_rng));
        out.push(skipped(charts::YEAR_LINE_HEADING, NO_DATA));
        out.push(skipped(charts::HIERARCHY_HEADING, NO_DATA));
        out
    }
}

fn has_column(df: &DataFrame, name: &str) -> bool {
    df.get_column_names().iter().any(|c| c.as_str() == name)
}

fn skipped(heading: &str, reason: &str) -> ChartView {
    ChartView::Skipped {
        heading: heading.to_string(),
        reason: reason.to_string(),
    }
}

/// Build the view if its inputs exist, otherwise skip it with `reason`
fn when<F>(ready: bool, heading: &str, reason: &str, build: F) -> ChartView
where
    F: FnOnce() -> Result<ChartRequest>,
{
    if !ready {
        return skipped(heading, reason);
    }
    match build() {
        Ok(request) => ChartView::Ready(request),
        Err(e) => skipped(heading, &e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    fn admin_table() -> DataFrame {
        df! {
            "Admin1_Name_En" => &["A", "A", "B", "A"],
            "Admin3_Name_En" => &["A1", "A2", "B1", "A1"],
            "Admin4_Name_En" => &["a1x", "a2x", "b1x", "a1y"],
            "Record_Date" => &["2020-01-02", "bad", "2021-07-08", "2020-11-30"],
        }
        .unwrap()
    }

    fn render(df: DataFrame) -> RenderPass {
        Pipeline::new(AppConfig::default()).render("test.csv", Ok(df), &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_full_table_builds_every_view() {
        let pass = render(admin_table());
        assert!(pass.loaded);
        assert_eq!(pass.views.len(), 8);
        assert!(pass.views.iter().all(|v| v.is_ready()), "{:?}", pass.views);
        assert_eq!(pass.province_counts.get("A"), Some(3));
        assert_eq!(pass.year_counts.total(), 3);
        assert_eq!(pass.table.height(), 4);
        assert_eq!(pass.year_view.as_ref().map(|v| v.height()), Some(3));
    }

    #[test]
    fn test_bubble_heading_names_configured_top_n() {
        let pass = render(admin_table());
        let bubble = pass.ready_views().find(|r| r.id == "area_bubble").unwrap();

        assert_eq!(bubble.data.len(), 4);
        assert_eq!(bubble.heading, charts::bubble_heading(50));
    }

    #[test]
    fn test_load_failure_degrades_to_warnings() {
        let pass = Pipeline::new(AppConfig::default()).render(
            "missing.csv",
            Err(LoadError::NotFound("missing.csv".to_string())),
            &mut StdRng::seed_from_u64(7),
        );

        assert!(!pass.loaded);
        assert_eq!(pass.notices[0].level, crate::types::NoticeLevel::Error);
        assert!(pass.preview.is_none());
        let ready: Vec<&str> = pass.ready_views().map(|r| r.id.as_str()).collect();
        assert_eq!(ready, vec!["dummy_line"]);
    }

    #[test]
    fn test_missing_area_skips_bubble_and_scatter() {
        let df = df! {
            "Admin1_Name_En" => &["A", "B"],
            "Record_Date" => &["2020-01-01", "2021-01-01"],
        }
        .unwrap();

        let pass = render(df);
        let skipped: Vec<&str> = pass
            .views
            .iter()
            .filter(|v| !v.is_ready())
            .map(|v| v.heading())
            .collect();
        assert_eq!(
            skipped,
            vec![
                charts::bubble_heading(50).as_str(),
                charts::SCATTER_HEADING,
                charts::HIERARCHY_HEADING,
            ]
        );
        assert!(!has_column(&pass.table, SIMULATED_AREA_COLUMN));
    }
}

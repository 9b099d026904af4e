use admin4_dashboard::charts::{ChartData, ChartView};
use admin4_dashboard::config::{AppConfig, ConfigManager};
use admin4_dashboard::data::connectors::{SIMULATED_AREA_COLUMN, SIMULATED_POPULATION_COLUMN, YEAR_COLUMN};
use admin4_dashboard::engines::Pipeline;
use admin4_dashboard::types::NoticeLevel;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::Write;

const CSV: &str = "\
Admin1_Name_En,Admin3_Name_En,Admin4_Name_En,Record_Date
Kabul,Kabul City,Area 1,2020-01-15
Kabul,Kabul City,Area 2,2020-02-20
Kabul,Paghman,Area 3,not-a-date
Herat,Herat City,Area 4,2021-06-01
Balkh,Mazar,Area 5,03/04/2019
Herat,Guzara,Area 6,
";

fn write_csv(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn config_for(path: &str) -> AppConfig {
    let mut manager = ConfigManager::new();
    manager.update(|c| c.source.location = path.to_string()).unwrap();
    manager.get()
}

#[test]
fn test_run_from_local_file() {
    let file = write_csv(CSV);
    let config = config_for(file.path().to_str().unwrap());
    let pass = Pipeline::new(config).run();

    assert!(pass.loaded);
    assert_eq!(pass.notices[0].level, NoticeLevel::Success);
    assert_eq!(pass.table.height(), 6);

    // Province counts follow descending count, ties by first appearance
    let labels: Vec<&str> = pass.province_counts.rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(labels, vec!["Kabul", "Herat", "Balkh"]);
    assert_eq!(pass.province_counts.total(), pass.table.height());

    // Unparsed and empty dates stay in the base table but leave the year view
    let year_view = pass.year_view.as_ref().unwrap();
    assert_eq!(year_view.height(), 4);
    assert_eq!(pass.table.column(YEAR_COLUMN).unwrap().null_count(), 2);
    assert_eq!(pass.year_counts.total(), 4);

    let preview = pass.preview.as_ref().unwrap();
    assert_eq!(preview.first_rows.len(), 5);
    assert_eq!(preview.metadata.columns.len(), 4);

    assert!(pass.views.iter().all(ChartView::is_ready), "{:?}", pass.views);
}

#[test]
fn test_missing_file_suppresses_data_views() {
    let config = config_for("/no/such/dir/admin4.csv");
    let pass = Pipeline::new(config).run();

    assert!(!pass.loaded);
    assert_eq!(pass.notices[0].level, NoticeLevel::Error);
    assert!(pass.notices[0].message.contains("not found"));
    assert!(pass.notices.iter().any(|n| n.message == "No data to display."));
    assert_eq!(pass.table.height(), 0);
    assert_eq!(pass.ready_views().count(), 1);
}

#[test]
fn test_missing_record_date_skips_year_extraction() {
    let file = write_csv("Admin1_Name_En,Admin4_Name_En\nA,x\nA,y\nB,z\n");
    let pass = Pipeline::new(config_for(file.path().to_str().unwrap())).run();

    assert!(pass.loaded);
    assert!(pass.year_view.is_none());
    assert!(pass
        .notices
        .iter()
        .any(|n| n.message == "'Record_Date' column not found, skipping Year extraction."));
    assert!(!pass
        .table
        .get_column_names()
        .iter()
        .any(|c| c.as_str() == YEAR_COLUMN));

    let counts: Vec<(String, usize)> = pass
        .province_counts
        .rows
        .iter()
        .map(|r| (r.category.clone(), r.count))
        .collect();
    assert_eq!(counts, vec![("A".to_string(), 2), ("B".to_string(), 1)]);
}

#[test]
fn test_synthetic_columns_reproducible_across_runs() {
    let file = write_csv(CSV);
    let config = config_for(file.path().to_str().unwrap());
    let location = config.source.location.clone();
    let pipeline = Pipeline::new(config);

    let load = || admin4_dashboard::data::CsvConnector::load_file(&location);
    let first = pipeline.render(&location, load(), &mut StdRng::seed_from_u64(1));
    let second = pipeline.render(&location, load(), &mut StdRng::seed_from_u64(2));

    for column in [SIMULATED_AREA_COLUMN, SIMULATED_POPULATION_COLUMN] {
        let a = first.table.column(column).unwrap();
        let b = second.table.column(column).unwrap();
        assert!(a.as_materialized_series().equals(b.as_materialized_series()), "{} differs", column);
    }
}

#[test]
fn test_bubble_bounded_by_top_n() {
    let mut csv = String::from("Admin1_Name_En,Admin3_Name_En,Admin4_Name_En,Record_Date\n");
    for i in 0..200 {
        csv.push_str(&format!("P{},D{},Area {},2020-01-01\n", i % 7, i % 13, i));
    }
    let file = write_csv(&csv);
    let mut config = config_for(file.path().to_str().unwrap());
    config.views.top_n = 50;
    let pass = Pipeline::new(config).run();

    let bubble = pass.ready_views().find(|r| r.id == "area_bubble").unwrap();
    let ChartData::Points(points) = &bubble.data else {
        panic!("bubble chart without points");
    };
    assert_eq!(points.len(), 50);

    let mut ranks: Vec<usize> = points.iter().map(|p| p.y as usize).collect();
    ranks.sort_unstable();
    assert_eq!(ranks, (1..=50).collect::<Vec<_>>());

    let scatter = pass.ready_views().find(|r| r.id == "area_population_scatter").unwrap();
    assert_eq!(scatter.data.len(), 200);
}

#[test]
fn test_dummy_line_is_not_seeded_by_config() {
    let file = write_csv(CSV);
    let config = config_for(file.path().to_str().unwrap());
    let location = config.source.location.clone();

    let render = |seed: u64| {
        let mut config = config.clone();
        config.synthetic.seed = seed;
        Pipeline::new(config).render(
            &location,
            admin4_dashboard::data::CsvConnector::load_file(&location),
            &mut StdRng::seed_from_u64(3),
        )
    };
    let dummy = |pass: &admin4_dashboard::engines::RenderPass| {
        pass.ready_views().find(|r| r.id == "dummy_line").unwrap().data.clone()
    };

    let first = render(42);
    let second = render(7);

    let ChartData::Series(series) = dummy(&first) else {
        panic!("dummy line without series");
    };
    assert_eq!(series.len(), 11);
    assert_eq!(series[0][0], 2015.0);
    assert_eq!(series[10][0], 2025.0);
    assert!(series.iter().all(|[_, y]| (50.0..100.0).contains(y)));

    // The table seed moves the synthetic columns but not the line
    assert_eq!(dummy(&first), dummy(&second));
    let area = |pass: &admin4_dashboard::engines::RenderPass| {
        pass.table.column(SIMULATED_AREA_COLUMN).unwrap().as_materialized_series().clone()
    };
    assert!(!area(&first).equals(&area(&second)));
}

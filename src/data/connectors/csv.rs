use crate::error::LoadError;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;
use super::types::{ColumnStats, DataPreview, DatasetMetadata};

pub struct CsvConnector;

impl CsvConnector {
    /// Whether `location` should be fetched over HTTP rather than read from disk
    pub fn is_remote(location: &str) -> bool {
        let lower = location.trim_start().to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }

    /// Load a CSV from a local path or an http(s) URL
    pub fn load(location: &str, timeout: Duration) -> Result<DataFrame, LoadError> {
        log::info!("Loading CSV from {}", location);
        let df = if Self::is_remote(location) {
            let bytes = Self::fetch(location, timeout)?;
            Self::parse_bytes(bytes)?
        } else {
            Self::load_file(location)?
        };
        log::info!("Loaded {} rows x {} columns", df.height(), df.width());
        Ok(df)
    }

    /// Load CSV file into DataFrame
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<DataFrame, LoadError> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(LoadError::NotFound(path.display().to_string()));
        }

        Self::read_options()
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .and_then(|reader| reader.finish())
            .map_err(|e| LoadError::Malformed(format!("Failed to read CSV: {}", e)))
    }

    /// Parse CSV bytes already in memory
    pub fn parse_bytes(bytes: Vec<u8>) -> Result<DataFrame, LoadError> {
        Self::read_options()
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
            .map_err(|e| LoadError::Malformed(format!("Failed to read CSV: {}", e)))
    }

    fn fetch(url: &str, timeout: Duration) -> Result<Vec<u8>, LoadError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        let response = client.get(url).send()?.error_for_status()?;
        let bytes = response.bytes()?;
        log::debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    fn read_options() -> CsvReadOptions {
        // Scan every row before fixing column types; mixed columns fall back to text
        CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
    }

    pub fn create_metadata(location: &str, df: &DataFrame) -> DatasetMetadata {
        DatasetMetadata {
            location: location.to_string(),
            num_rows: df.height(),
            num_columns: df.width(),
            columns: df.get_column_names().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create a preview of the first `rows` rows for UI display
    pub fn create_preview(location: &str, df: &DataFrame, rows: usize) -> crate::error::Result<DataPreview> {
        let metadata = Self::create_metadata(location, df);

        let num_preview_rows = rows.min(df.height());
        let mut first_rows = Vec::with_capacity(num_preview_rows);
        for i in 0..num_preview_rows {
            let mut row = Vec::with_capacity(df.width());
            for column in df.get_columns() {
                row.push(Self::format_value(column.get(i)?));
            }
            first_rows.push(row);
        }

        let column_stats = df
            .get_columns()
            .iter()
            .map(|column| ColumnStats {
                name: column.name().to_string(),
                dtype: format!("{}", column.dtype()),
                null_count: column.null_count(),
            })
            .collect();

        Ok(DataPreview {
            metadata,
            first_rows,
            column_stats,
        })
    }

    fn format_value(value: AnyValue<'_>) -> String {
        match value {
            AnyValue::Null => "null".to_string(),
            AnyValue::String(s) => s.to_string(),
            AnyValue::StringOwned(s) => s.to_string(),
            AnyValue::Float64(v) => format!("{:.4}", v),
            AnyValue::Float32(v) => format!("{:.4}", v),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_is_remote() {
        assert!(CsvConnector::is_remote("https://example.org/data.csv"));
        assert!(CsvConnector::is_remote("HTTP://example.org/data.csv"));
        assert!(!CsvConnector::is_remote("data/admin4.csv"));
        assert!(!CsvConnector::is_remote("/tmp/https.csv"));
    }

    #[test]
    fn test_parse_bytes() {
        let csv = "Admin1_Name_En,Admin4_Name_En\nA,x\nA,y\nB,z\n";
        let df = CsvConnector::parse_bytes(csv.as_bytes().to_vec()).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_parse_empty_bytes_is_malformed() {
        let result = CsvConnector::parse_bytes(Vec::new());
        assert!(matches!(result, Err(LoadError::Malformed(_))));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let result = CsvConnector::load("/definitely/not/here/admin4.csv", Duration::from_secs(1));
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn test_create_preview() {
        let df = df! {
            "Admin1_Name_En" => &[Some("A"), None, Some("B")],
            "Simulated_Area" => &[120i64, 4500, 9000],
        }
        .unwrap();

        let preview = CsvConnector::create_preview("test.csv", &df, 2).unwrap();
        assert_eq!(preview.first_rows.len(), 2);
        assert_eq!(preview.first_rows[0], vec!["A".to_string(), "120".to_string()]);
        assert_eq!(preview.first_rows[1][0], "null");
        assert_eq!(preview.metadata.num_rows, 3);
        assert_eq!(preview.column_stats[0].null_count, 1);
    }
}

use crate::data::connectors::YEAR_COLUMN;
use crate::error::Result;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d/%m/%Y",
    "%m/%d/%Y",
    "%d-%m-%Y",
    "%d-%b-%Y",
    "%d %b %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M",
    "%m/%d/%Y %H:%M",
];

const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M%:z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%d %H:%M%z",
];

/// Calendar year of a date-like string, or `None` when it cannot be parsed
pub fn parse_year(raw: &str) -> Option<i32> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
        return s.parse().ok();
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.year());
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.year());
    }

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
    {
        return Some(date.year());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.year())
}

/// Result of adding the Year column
#[derive(Debug, Clone)]
pub struct YearExtraction {
    pub table: DataFrame,
    /// Rows whose date did not parse (null or garbage)
    pub unparsed: usize,
}

/// Return a copy of `df` with a nullable `Year` column parsed from `date_column`
pub fn with_year(df: &DataFrame, date_column: &str) -> Result<YearExtraction> {
    let dates = df.column(date_column)?.cast(&DataType::String)?;
    let years: Vec<Option<i32>> = dates
        .str()?
        .into_iter()
        .map(|value| value.and_then(parse_year))
        .collect();

    let unparsed = years.iter().filter(|y| y.is_none()).count();
    if unparsed > 0 {
        log::debug!(
            "{} of {} rows have an unparseable '{}'",
            unparsed,
            years.len(),
            date_column
        );
    }

    let mut table = df.clone();
    table.with_column(Column::new(YEAR_COLUMN.into(), years))?;

    Ok(YearExtraction { table, unparsed })
}

/// Working copy holding only the rows with a parsed Year
pub fn year_view(df: &DataFrame) -> Result<DataFrame> {
    let mask = df.column(YEAR_COLUMN)?.is_not_null();
    Ok(df.filter(&mask)?)
}

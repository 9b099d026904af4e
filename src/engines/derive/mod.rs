mod synthetic;
mod year;

pub use synthetic::{random_values, with_synthetic_column};
pub use year::{parse_year, with_year, year_view, YearExtraction};

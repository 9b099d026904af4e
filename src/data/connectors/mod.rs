mod csv;
mod types;
mod validator;

pub use csv::CsvConnector;
pub use types::{
    ColumnRole,
    ColumnStats,
    DataPreview,
    DatasetMetadata,
    FieldKind,
    ResolvedSchema,
    SIMULATED_AREA_COLUMN,
    SIMULATED_POPULATION_COLUMN,
    YEAR_COLUMN,
};
pub use validator::SchemaValidator;

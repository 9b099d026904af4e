pub mod connectors;

pub use connectors::{
    ColumnRole, CsvConnector, DataPreview, DatasetMetadata, ResolvedSchema, SchemaValidator,
};

use serde::{Deserialize, Serialize};

/// Columns the dashboard knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnRole {
    Province,
    District,
    Area,
    RecordDate,
}

/// What a column is expected to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldKind {
    Text,
    Date,
}

impl ColumnRole {
    /// Canonical column name used downstream
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Province => "Admin1_Name_En",
            Self::District => "Admin3_Name_En",
            Self::Area => "Admin4_Name_En",
            Self::RecordDate => "Record_Date",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::Province,
            Self::District,
            Self::Area,
            Self::RecordDate,
        ]
    }

    /// Accepted spellings, canonical name first
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Province => vec!["Admin1_Name_En", "admin1_name_en", "ADMIN1_NAME_EN", "Province", "province"],
            Self::District => vec!["Admin3_Name_En", "admin3_name_en", "ADMIN3_NAME_EN", "District", "district"],
            Self::Area => vec!["Admin4_Name_En", "admin4_name_en", "ADMIN4_NAME_EN", "Area", "area"],
            Self::RecordDate => vec!["Record_Date", "record_date", "RECORD_DATE", "Date", "date"],
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::RecordDate => FieldKind::Date,
            _ => FieldKind::Text,
        }
    }

    /// Whether a missing column is reported before any view runs
    pub fn warn_when_missing(&self) -> bool {
        matches!(self, Self::District | Self::RecordDate)
    }
}

/// Derived column names
pub const YEAR_COLUMN: &str = "Year";
pub const SIMULATED_AREA_COLUMN: &str = "Simulated_Area";
pub const SIMULATED_POPULATION_COLUMN: &str = "Simulated_Population";

/// Which roles were found after validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedSchema {
    present: Vec<ColumnRole>,
    missing: Vec<ColumnRole>,
}

impl ResolvedSchema {
    pub fn new(present: Vec<ColumnRole>, missing: Vec<ColumnRole>) -> Self {
        Self { present, missing }
    }

    pub fn has(&self, role: ColumnRole) -> bool {
        self.present.contains(&role)
    }

    pub fn has_all(&self, roles: &[ColumnRole]) -> bool {
        roles.iter().all(|r| self.has(*r))
    }

    /// Canonical name of `role` if the table carries it
    pub fn column(&self, role: ColumnRole) -> Option<&'static str> {
        self.has(role).then(|| role.as_str())
    }

    pub fn missing(&self) -> &[ColumnRole] {
        &self.missing
    }
}

/// Metadata about a loaded CSV
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetMetadata {
    pub location: String,
    pub num_rows: usize,
    pub num_columns: usize,
    pub columns: Vec<String>,
}

/// Data preview for UI display
#[derive(Debug, Clone)]
pub struct DataPreview {
    pub metadata: DatasetMetadata,
    pub first_rows: Vec<Vec<String>>,
    pub column_stats: Vec<ColumnStats>,
}

#[derive(Debug, Clone)]
pub struct ColumnStats {
    pub name: String,
    pub dtype: String,
    pub null_count: usize,
}

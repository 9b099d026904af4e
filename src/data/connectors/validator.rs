use crate::error::Result;
use crate::types::Notice;
use polars::prelude::*;
use super::types::{ColumnRole, ResolvedSchema};

pub struct SchemaValidator;

impl SchemaValidator {
    /// Names from `required` that the table does not carry, in request order
    pub fn missing_columns(df: &DataFrame, required: &[&str]) -> Vec<String> {
        let columns = df.get_column_names();
        required
            .iter()
            .filter(|name| !columns.iter().any(|col| col.as_str() == **name))
            .map(|name| name.to_string())
            .collect()
    }

    /// Rename aliased columns to their canonical names and record which roles exist
    pub fn resolve(df: &DataFrame) -> Result<(DataFrame, ResolvedSchema)> {
        let mut resolved = df.clone();
        let roles = ColumnRole::all();

        for role in &roles {
            if let Some(actual) = Self::find_column(df, role) {
                if actual != role.as_str() {
                    log::debug!("Renaming column '{}' to '{}'", actual, role.as_str());
                    resolved.rename(actual, role.as_str().into())?;
                }
            }
        }

        let required: Vec<&str> = roles.iter().map(|role| role.as_str()).collect();
        let absent = Self::missing_columns(&resolved, &required);
        let (missing, present): (Vec<ColumnRole>, Vec<ColumnRole>) = roles
            .into_iter()
            .partition(|role| absent.iter().any(|name| name == role.as_str()));

        for role in &missing {
            log::warn!("Column '{}' not found (tried {:?})", role.as_str(), role.aliases());
        }

        Ok((resolved, ResolvedSchema::new(present, missing)))
    }

    /// Up-front warnings for absent columns that views depend on
    pub fn warnings(schema: &ResolvedSchema) -> Vec<Notice> {
        schema
            .missing()
            .iter()
            .filter(|role| role.warn_when_missing())
            .map(|role| Notice::warning(format!("'{}' column not found.", role.as_str())))
            .collect()
    }

    /// Find column by checking aliases
    fn find_column(df: &DataFrame, role: &ColumnRole) -> Option<&'static str> {
        let columns = df.get_column_names();
        role.aliases()
            .into_iter()
            .find(|alias| columns.iter().any(|col| col.as_str() == *alias))
    }

    /// Columns that contain nulls, with their null counts
    pub fn check_nulls(df: &DataFrame) -> Vec<(String, usize)> {
        df.get_columns()
            .iter()
            .filter(|col| col.null_count() > 0)
            .map(|col| (col.name().to_string(), col.null_count()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::df;

    #[test]
    fn test_missing_columns_subset() {
        let df = df! {
            "Admin1_Name_En" => &["A", "B"],
            "Admin4_Name_En" => &["x", "y"],
        }
        .unwrap();

        let missing = SchemaValidator::missing_columns(
            &df,
            &["Admin1_Name_En", "Record_Date", "Admin3_Name_En"],
        );
        assert_eq!(missing, vec!["Record_Date".to_string(), "Admin3_Name_En".to_string()]);
    }

    #[test]
    fn test_missing_columns_on_empty_table() {
        let df = DataFrame::empty();
        let missing = SchemaValidator::missing_columns(&df, &["Admin1_Name_En"]);
        assert_eq!(missing, vec!["Admin1_Name_En".to_string()]);
    }

    #[test]
    fn test_resolve_renames_aliases() {
        let df = df! {
            "province" => &["A", "B"],
            "Admin4_Name_En" => &["x", "y"],
            "date" => &["2020-01-01", "2021-05-04"],
        }
        .unwrap();

        let (resolved, schema) = SchemaValidator::resolve(&df).unwrap();
        let cols = resolved.get_column_names();
        assert!(cols.iter().any(|c| c.as_str() == "Admin1_Name_En"));
        assert!(cols.iter().any(|c| c.as_str() == "Record_Date"));
        assert!(schema.has(ColumnRole::Province));
        assert!(schema.has(ColumnRole::RecordDate));
        assert!(!schema.has(ColumnRole::District));
        assert_eq!(schema.missing(), &[ColumnRole::District]);

        // Source table untouched
        assert!(df.get_column_names().iter().any(|c| c.as_str() == "province"));
    }

    #[test]
    fn test_resolve_agrees_with_missing_columns_on_aliases() {
        let df = df! {
            "province" => &["A", "B"],
            "Area" => &["x", "y"],
        }
        .unwrap();

        let required: Vec<&str> = ColumnRole::all().iter().map(|r| r.as_str()).collect();
        assert_eq!(SchemaValidator::missing_columns(&df, &["Admin1_Name_En"]).len(), 1);

        let (resolved, schema) = SchemaValidator::resolve(&df).unwrap();
        let missing = SchemaValidator::missing_columns(&resolved, &required);
        let from_schema: Vec<String> =
            schema.missing().iter().map(|r| r.as_str().to_string()).collect();

        assert_eq!(missing, from_schema);
        assert_eq!(missing, vec!["Admin3_Name_En".to_string(), "Record_Date".to_string()]);
        assert!(schema.has_all(&[ColumnRole::Province, ColumnRole::Area]));
    }

    #[test]
    fn test_warnings_only_for_flagged_roles() {
        let df = df! {
            "Admin1_Name_En" => &["A"],
        }
        .unwrap();

        let (_, schema) = SchemaValidator::resolve(&df).unwrap();
        let warnings = SchemaValidator::warnings(&schema);
        let messages: Vec<&str> = warnings.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            vec!["'Admin3_Name_En' column not found.", "'Record_Date' column not found."]
        );
    }

    #[test]
    fn test_check_nulls() {
        let df = df! {
            "Admin1_Name_En" => &[Some("A"), None, Some("B")],
            "Admin4_Name_En" => &["x", "y", "z"],
        }
        .unwrap();

        let report = SchemaValidator::check_nulls(&df);
        assert_eq!(report, vec![("Admin1_Name_En".to_string(), 1)]);
    }
}

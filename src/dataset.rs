//! Dataset ingestion — reads the drug interaction CSV into raw rows.
//!
//! The dataset is a single trusted batch: any unreadable or malformed row
//! aborts the load, there is no per-row skip path. Fields are matched by
//! header name, so column order in the file does not matter.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// One row of the interaction dataset, verbatim.
///
/// Accepts both the raw dataset headers (`Drug 1`) and the snake_case
/// variants (`drug_1`) produced by common cleanup passes.
#[derive(Debug, Clone, Deserialize)]
pub struct RawInteraction {
    #[serde(rename = "Drug 1", alias = "drug_1")]
    pub drug_a: String,
    #[serde(rename = "Drug 2", alias = "drug_2")]
    pub drug_b: String,
    #[serde(rename = "Interaction Description", alias = "interaction_description")]
    pub description: String,
}

/// Fatal dataset problems. Raised during load or index construction;
/// either way the whole batch is rejected.
#[derive(Error, Debug)]
pub enum DataFormatError {
    #[error("Cannot read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("Row {row}: drug name is empty")]
    MissingDrugName { row: usize },

    #[error("Row {row}: interaction description is empty")]
    EmptyDescription { row: usize },
}

/// Load all rows from a CSV file at `path`.
///
/// Row contents are returned untouched; normalization and validation
/// happen in [`crate::index::InteractionIndex::build`].
pub fn load_rows(path: &Path) -> Result<Vec<RawInteraction>, DataFormatError> {
    let mut reader = csv::Reader::from_path(path)?;
    let rows = reader
        .deserialize()
        .collect::<Result<Vec<RawInteraction>, _>>()?;
    tracing::info!("Loaded {} interaction rows from {}", rows.len(), path.display());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write csv");
        file
    }

    #[test]
    fn loads_reference_headers() {
        let file = write_csv(
            "Drug 1,Drug 2,Interaction Description\n\
             Warfarin,Aspirin,may increase bleeding risk\n",
        );
        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].drug_a, "Warfarin");
        assert_eq!(rows[0].drug_b, "Aspirin");
        assert_eq!(rows[0].description, "may increase bleeding risk");
    }

    #[test]
    fn column_order_does_not_matter() {
        let file = write_csv(
            "Interaction Description,Drug 2,Drug 1\n\
             may cause nausea,Ibuprofen,Metformin\n",
        );
        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows[0].drug_a, "Metformin");
        assert_eq!(rows[0].drug_b, "Ibuprofen");
        assert_eq!(rows[0].description, "may cause nausea");
    }

    #[test]
    fn snake_case_headers_accepted() {
        let file = write_csv(
            "drug_1,drug_2,interaction_description\n\
             Warfarin,Aspirin,may increase bleeding risk\n",
        );
        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows[0].drug_a, "Warfarin");
    }

    #[test]
    fn quoted_description_with_commas() {
        let file = write_csv(
            "Drug 1,Drug 2,Interaction Description\n\
             A,B,\"nausea, vomiting, and headache\"\n",
        );
        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows[0].description, "nausea, vomiting, and headache");
    }

    #[test]
    fn missing_column_fails() {
        let file = write_csv(
            "Drug 1,Drug 2\n\
             Warfarin,Aspirin\n",
        );
        let err = load_rows(file.path()).unwrap_err();
        assert!(matches!(err, DataFormatError::Csv(_)));
    }

    #[test]
    fn missing_file_fails() {
        let err = load_rows(Path::new("/nonexistent/interactions.csv")).unwrap_err();
        assert!(matches!(err, DataFormatError::Csv(_) | DataFormatError::Io(_)));
    }
}

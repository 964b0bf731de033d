use std::path::Path;

use csv::ReaderBuilder;
use tracing::info;

use crate::models::BuildingRecord;

use super::DatasetError;

/// Load the full building table from a CSV file.
///
/// A missing file is the only checked failure; a malformed row propagates
/// as a csv error.
pub fn load_buildings(path: &Path) -> Result<Vec<BuildingRecord>, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::FileNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut records = Vec::new();
    for result in reader.deserialize() {
        let record: BuildingRecord = result?;
        records.push(record);
    }

    info!(
        "Loaded {} building records from {}",
        records.len(),
        path.display()
    );

    Ok(records)
}

use crate::data::normalize::CanonicalField;
use crate::error::PipelineError;
use shared::models::NormalizedTable;

/// Checks that all four canonical columns survived normalization. The
/// missing names are reported together so the user can fix the file in one
/// pass; nothing downstream runs when this fails.
pub fn require_columns(table: &NormalizedTable) -> Result<(), PipelineError> {
    let missing: Vec<String> = CanonicalField::ALL
        .iter()
        .map(|f| f.name())
        .filter(|name| table.column_index(name).is_none())
        .map(str::to_string)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(PipelineError::MissingColumns(missing))
    }
}

use std::path::{Path, PathBuf};

use crate::config::{ensure_dir, Config, ConfigStore};
use crate::document::Document;
use crate::errors::LeaveError;
use crate::record::LeaveRecord;

/// Result of a successful populate run.
#[derive(Debug)]
pub struct PopulateOutcome {
    pub path: PathBuf,
    pub config: Config,
}

/// Writes every field into its template cell, saves the filled form under
/// `out_dir`, then persists the new balance. The balance is only touched
/// after the save has succeeded.
pub fn populate(
    record: &LeaveRecord,
    mut document: Document,
    out_dir: &Path,
    store: &ConfigStore,
) -> Result<PopulateOutcome, LeaveError> {
    for field in record.fields() {
        document.append(field.cell, &field.value.to_string())?;
    }

    let file_name = output_file_name(record)?;
    ensure_dir(out_dir)?;
    let path = out_dir.join(&file_name);
    document.save(&path)?;
    tracing::info!(path = %path.display(), "saved populated form");

    let new_balance = record
        .resulting_balance()
        .ok_or_else(|| LeaveError::InvalidInput("record carries no balance field".into()))?;
    let config = store.update_balance(new_balance)?;

    Ok(PopulateOutcome { path, config })
}

/// `<INITIALS>_ANNUAL_<DDMMYYYY>.docx`, both parts taken from the record
/// as rendered.
pub fn output_file_name(record: &LeaveRecord) -> Result<String, LeaveError> {
    let name = record
        .display_value("name")
        .ok_or_else(|| LeaveError::InvalidInput("record carries no name field".into()))?;
    let start = record
        .display_value("start_date")
        .ok_or_else(|| LeaveError::InvalidInput("record carries no start_date field".into()))?;

    let initials: String = name
        .split_whitespace()
        .filter_map(|token| token.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    let day_digits: String = start.chars().filter(|ch| *ch != '/').collect();

    Ok(format!("{initials}_ANNUAL_{day_digits}.docx"))
}

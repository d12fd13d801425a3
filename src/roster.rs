//! CSV roster import: one participant per row under a `name` header.

use crate::models::ValidationError;
use serde::Deserialize;
use std::io::Read;

#[derive(Deserialize)]
struct RosterRow {
    name: String,
}

/// Parse participant names from CSV. Names are trimmed; blank names are skipped.
pub fn parse_roster<R: Read>(reader: R) -> Result<Vec<String>, ValidationError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut names = Vec::new();
    for row in rdr.deserialize::<RosterRow>() {
        let row = row.map_err(|e| ValidationError::Roster(e.to_string()))?;
        let name = row.name.trim();
        if !name.is_empty() {
            names.push(name.to_string());
        }
    }
    Ok(names)
}

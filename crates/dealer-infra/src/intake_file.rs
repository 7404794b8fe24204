//! Intake-form file loaders
//!
//! Forms arrive either as a headered CSV
//! (`type,engine,wheels,seats,color,model,max_cargo`, the cargo column
//! optional) or as a JSON array of form objects. Every field is kept as raw
//! text; interpretation happens later in the intake pipeline.

use std::path::Path;

use dealer_app::IntakeForm;
use dealer_types::{Error, Result};

/// Load intake forms from a file, dispatching on the extension.
/// `.json` is parsed as JSON; anything else is treated as CSV.
pub fn load_forms(path: &Path) -> Result<Vec<IntakeForm>> {
    if !path.exists() {
        return Err(Error::FileNotFound(path.display().to_string()));
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some("json") => load_forms_from_json(path),
        _ => load_forms_from_csv(path),
    }
}

/// Load intake forms from a headered CSV file
pub fn load_forms_from_csv(path: &Path) -> Result<Vec<IntakeForm>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| Error::Csv(e.to_string()))?;

    let mut forms = Vec::new();
    for record in reader.deserialize() {
        let form: IntakeForm = record.map_err(|e| Error::Csv(e.to_string()))?;
        forms.push(form);
    }
    Ok(forms)
}

/// Load intake forms from a JSON array
pub fn load_forms_from_json(path: &Path) -> Result<Vec<IntakeForm>> {
    let content = std::fs::read_to_string(path)?;
    let forms: Vec<IntakeForm> = serde_json::from_str(&content)?;
    Ok(forms)
}

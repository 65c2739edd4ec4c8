use crate::errors::{AppError, AppResult};
use crate::export::{EventExport, notify_export_success};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(events: &[EventExport], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(events)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", events.len(), path);
    Ok(())
}

/// Export CSV (header taken from the serde field names).
pub(crate) fn export_csv(events: &[EventExport], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for item in events {
        wtr.serialize(item)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", events.len(), path);
    Ok(())
}

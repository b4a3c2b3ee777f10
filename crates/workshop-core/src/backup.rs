use crate::error::{Result, WorkshopError};
use crate::store::Store;
use chrono::{DateTime, Utc};

/// Filename for a backup taken at `now`, UTC timestamp embedded.
pub fn backup_filename(now: DateTime<Utc>) -> String {
    format!("aggregated-backup-{}.json", now.format("%Y%m%dT%H%M%SZ"))
}

/// Serialize the whole store for download.
pub fn export(store: &Store) -> Result<String> {
    Ok(serde_json::to_string_pretty(store)?)
}

/// Parse and validate an uploaded backup.
///
/// The only structural requirement is the two top-level maps; a document
/// missing either is rejected with an explicit validation error before
/// anything is replaced. Callers swap the store wholesale only on success,
/// so the existing store is untouched by any failure here.
pub fn restore(content: &str) -> Result<Store> {
    let raw: serde_json::Value = serde_json::from_str(content)?;
    let Some(map) = raw.as_object() else {
        return Err(WorkshopError::InvalidBackup(
            "expected a JSON object".to_string(),
        ));
    };
    if !map.contains_key("products") || !map.contains_key("business_owners") {
        return Err(WorkshopError::InvalidBackup(
            "expected keys 'products' and 'business_owners'".to_string(),
        ));
    }
    let store: Store = serde_json::from_value(raw)?;
    Ok(store)
}

use serde_json::Value;

/// Record-level keys written by earlier versions and since dropped from the
/// schema. Stripped from the raw store JSON before typed deserialization so
/// a migrated store saves back clean.
const DEPRECATED_RECORD_KEYS: &[&str] = &["last_updated", "simple_edit"];

/// Remove deprecated keys from every product and business owner record.
/// Returns `true` if anything was stripped.
pub fn strip_deprecated_fields(raw: &mut Value) -> bool {
    let mut changed = false;
    for section in ["products", "business_owners"] {
        let Some(records) = raw.get_mut(section).and_then(Value::as_object_mut) else {
            continue;
        };
        for record in records.values_mut() {
            let Some(map) = record.as_object_mut() else {
                continue;
            };
            for key in DEPRECATED_RECORD_KEYS {
                if map.remove(*key).is_some() {
                    changed = true;
                }
            }
        }
    }
    changed
}

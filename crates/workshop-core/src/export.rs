use crate::error::Result;
use crate::store::Store;

/// Flatten every product record into a tabular CSV.
///
/// The seven flat metadata fields get one column each; the nested
/// technical session does not flatten meaningfully, so it ships as a
/// single compact-JSON column.
pub fn products_csv(store: &Store) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "product_id",
        "product_name",
        "workstream",
        "business_owner",
        "existing_users",
        "primary_operator",
        "primary_developer",
        "technical_session",
    ])?;

    for record in store.products.values() {
        let session = serde_json::to_string(&record.technical_session)?;
        writer.write_record([
            record.product_id.as_str(),
            record.product_name.as_str(),
            record.workstream.as_str(),
            record.business_owner.as_str(),
            record.existing_users.as_str(),
            record.primary_operator.as_str(),
            record.primary_developer.as_str(),
            session.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| crate::WorkshopError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

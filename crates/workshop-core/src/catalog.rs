use crate::slug::slugify;
use crate::store::Store;
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeSet;
use std::path::Path;

// ---------------------------------------------------------------------------
// Catalog rows
// ---------------------------------------------------------------------------

/// One usable row from the product catalog CSV.
///
/// The catalog is consumed positionally: name (0), workstream (1), owner
/// (3), users (4), operator (6), developer (10). Every other column is
/// ignored and short rows pad with empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogRow {
    pub product_name: String,
    pub workstream: String,
    pub business_owner: String,
    pub existing_users: String,
    pub primary_operator: String,
    pub primary_developer: String,
}

fn column(record: &csv::StringRecord, index: usize) -> String {
    record.get(index).unwrap_or("").trim().to_string()
}

/// Read catalog rows, applying the row exclusion rules.
///
/// An unreadable or missing catalog yields an empty list rather than an
/// error; the import is a convenience and must not fail the session.
pub fn read_catalog(path: &Path) -> Vec<CatalogRow> {
    match try_read_catalog(path) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::warn!("could not read product catalog {}: {e}", path.display());
            Vec::new()
        }
    }
}

fn try_read_catalog(path: &Path) -> Result<Vec<CatalogRow>, csv::Error> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows = Vec::new();
    for (index, record) in reader.records().enumerate() {
        let record = record?;
        if index == 0 {
            continue; // header row
        }
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }

        let product_name = column(&record, 0);
        if product_name.is_empty() {
            continue;
        }
        // Catalog-specific exclusion for placeholder platform rows,
        // preserved literally (both sides are substring checks).
        if product_name.contains("Platform") && column(&record, 2).contains("N/A") {
            continue;
        }

        rows.push(CatalogRow {
            product_name,
            workstream: column(&record, 1),
            business_owner: column(&record, 3),
            existing_users: column(&record, 4),
            primary_operator: column(&record, 6),
            primary_developer: column(&record, 10),
        });
    }
    Ok(rows)
}

// ---------------------------------------------------------------------------
// Import
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Serialize)]
pub struct ImportSummary {
    /// Slugs created by this run, in catalog order.
    pub imported: Vec<String>,
    /// Rows whose slug already existed (records never overwritten).
    pub skipped_existing: usize,
    /// Owners whose `products_covered` list was recomputed.
    pub owners_updated: Vec<String>,
}

/// Import catalog rows into the store.
///
/// Products are additive-only: a row whose slug already exists is skipped
/// entirely, so manual edits survive re-imports. Owner coverage is the
/// opposite: for every owner referenced by any row, `products_covered` is
/// fully recomputed from the current product set.
pub fn import(store: &mut Store, rows: &[CatalogRow]) -> crate::Result<ImportSummary> {
    let mut summary = ImportSummary::default();
    let mut referenced_owners = BTreeSet::new();

    for row in rows {
        let id = slugify(&row.product_name);
        if id.is_empty() {
            continue;
        }
        if store.products.contains_key(&id) {
            summary.skipped_existing += 1;
        } else {
            store.upsert_product(
                &id,
                &json!({
                    "product_id": id,
                    "product_name": row.product_name,
                    "workstream": row.workstream,
                    "business_owner": row.business_owner,
                    "existing_users": row.existing_users,
                    "primary_operator": row.primary_operator,
                    "primary_developer": row.primary_developer,
                }),
            )?;
            summary.imported.push(id);
        }

        if !row.business_owner.is_empty() {
            referenced_owners.insert(row.business_owner.clone());
        }
    }

    for owner in referenced_owners {
        store.recompute_owner_coverage(&owner);
        summary.owners_updated.push(owner);
    }

    Ok(summary)
}

use crate::error::{Result, WorkshopError};
use crate::merge::deep_merge;
use crate::migrations;
use crate::owner::OwnerRecord;
use crate::product::ProductRecord;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::path::Path;

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// The aggregated store: one JSON document holding every product and
/// business owner record.
///
/// Products are keyed by slug (derived once at creation); business owners
/// are keyed by their verbatim display name. Every operation is a
/// whole-document read-modify-write, with no partial writes or locking. The
/// only atomicity guarantee is "last successful write wins", which is
/// acceptable for a single-operator tool used during sequential sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Store {
    pub products: BTreeMap<String, ProductRecord>,
    pub business_owners: BTreeMap<String, OwnerRecord>,
}

impl Store {
    /// Load the store, treating a missing file as empty (first run).
    /// Deprecated record keys from older versions are stripped before
    /// typed deserialization.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(path)?;
        let mut raw: Value = serde_json::from_str(&data)?;
        migrations::strip_deprecated_fields(&mut raw);
        let store: Store = serde_json::from_value(raw)?;
        Ok(store)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        let data = serde_json::to_string_pretty(self)?;
        crate::io::atomic_write(path, data.as_bytes())
    }

    // ---------------------------------------------------------------------------
    // Products
    // ---------------------------------------------------------------------------

    pub fn product(&self, id: &str) -> Result<&ProductRecord> {
        self.products
            .get(id)
            .ok_or_else(|| WorkshopError::ProductNotFound(id.to_string()))
    }

    /// Deep-merge a partial update into the product keyed by `id`, seeding
    /// from the full template if the product does not exist yet. Leaf
    /// fields absent from `partial` are preserved at every nesting depth.
    pub fn upsert_product(&mut self, id: &str, partial: &Value) -> Result<()> {
        let existing = match self.products.remove(id) {
            Some(record) => record,
            None => ProductRecord::template(),
        };
        let mut current = serde_json::to_value(existing)?;
        deep_merge(&mut current, partial);
        let merged: ProductRecord = serde_json::from_value(current)?;
        self.products.insert(id.to_string(), merged);
        Ok(())
    }

    /// Remove a product. Returns `false` if the slug was not present.
    pub fn remove_product(&mut self, id: &str) -> bool {
        self.products.remove(id).is_some()
    }

    // ---------------------------------------------------------------------------
    // Business owners
    // ---------------------------------------------------------------------------

    pub fn owner(&self, name: &str) -> Result<&OwnerRecord> {
        self.business_owners
            .get(name)
            .ok_or_else(|| WorkshopError::OwnerNotFound(name.to_string()))
    }

    /// Replace top-level keys of the owner record with those present in
    /// `partial`, seeding from the template when the owner is new. Owner
    /// session forms post whole parts, so unlike products there is no
    /// recursive merge here.
    pub fn upsert_owner(&mut self, name: &str, partial: &Value) -> Result<()> {
        let existing = match self.business_owners.remove(name) {
            Some(record) => record,
            None => OwnerRecord::template(),
        };
        let mut current = serde_json::to_value(existing)?;
        if let (Some(target), Some(source)) = (current.as_object_mut(), partial.as_object()) {
            for (key, value) in source {
                target.insert(key.clone(), value.clone());
            }
        }
        let mut merged: OwnerRecord = serde_json::from_value(current)?;
        if merged.owner_name.is_empty() {
            merged.owner_name = name.to_string();
        }
        self.business_owners.insert(name.to_string(), merged);
        Ok(())
    }

    /// Recompute `products_covered` for `name` from the current product
    /// set: the display names of every product whose `business_owner`
    /// matches. Always a full recompute, never an append.
    pub fn recompute_owner_coverage(&mut self, name: &str) {
        let covered: Vec<String> = self
            .products
            .values()
            .filter(|p| p.business_owner == name)
            .map(|p| p.product_name.clone())
            .collect();
        let record = self
            .business_owners
            .entry(name.to_string())
            .or_insert_with(OwnerRecord::template);
        if record.owner_name.is_empty() {
            record.owner_name = name.to_string();
        }
        record.products_covered = covered;
    }
}

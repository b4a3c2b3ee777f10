use crate::output::print_json;
use anyhow::Result;
use std::path::Path;
use workshop_core::config::Config;
use workshop_core::{catalog, paths};

/// Import the product catalog CSV into the aggregated store.
pub fn run(root: &Path, json: bool) -> Result<()> {
    let config = Config::load(root)?;
    let catalog_path = paths::catalog_path(root, &config);
    let rows = catalog::read_catalog(&catalog_path);

    let (mut store, store_path) = super::open_store(root)?;
    let summary = catalog::import(&mut store, &rows)?;
    store.save(&store_path)?;

    if json {
        return print_json(&summary);
    }

    if rows.is_empty() {
        println!("No catalog rows found at {}", catalog_path.display());
        return Ok(());
    }
    println!(
        "Imported {} product(s), skipped {} already present.",
        summary.imported.len(),
        summary.skipped_existing
    );
    for slug in &summary.imported {
        println!("  + {slug}");
    }
    if !summary.owners_updated.is_empty() {
        println!("Recomputed coverage for: {}", summary.owners_updated.join(", "));
    }
    Ok(())
}

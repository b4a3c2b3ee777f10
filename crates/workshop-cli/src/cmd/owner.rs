use crate::output::{print_json, print_table};
use anyhow::{anyhow, Result};
use clap::Subcommand;
use serde_json::Value;
use std::path::Path;

#[derive(Subcommand, Debug)]
pub enum OwnerSubcommand {
    /// List all business owners
    List,
    /// Show a full business owner record
    Show { name: String },
    /// Replace top-level sections of an owner record (created on first edit)
    Edit {
        /// Owner name, verbatim (e.g. "J. Smith")
        name: String,
        /// JSON object whose top-level keys replace the stored ones
        #[arg(long)]
        data: String,
    },
}

pub fn run(root: &Path, subcommand: OwnerSubcommand, json: bool) -> Result<()> {
    match subcommand {
        OwnerSubcommand::List => run_list(root, json),
        OwnerSubcommand::Show { name } => run_show(root, &name),
        OwnerSubcommand::Edit { name, data } => run_edit(root, &name, &data, json),
    }
}

fn run_list(root: &Path, json: bool) -> Result<()> {
    let (store, _) = super::open_store(root)?;

    if json {
        let rows: Vec<Value> = store
            .business_owners
            .values()
            .map(|o| {
                serde_json::json!({
                    "owner_name": o.owner_name,
                    "products_covered": o.products_covered,
                })
            })
            .collect();
        return print_json(&rows);
    }

    if store.business_owners.is_empty() {
        println!("No business owners recorded.");
        return Ok(());
    }

    let headers = &["OWNER", "PRODUCTS COVERED"];
    let rows: Vec<Vec<String>> = store
        .business_owners
        .values()
        .map(|o| vec![o.owner_name.clone(), o.products_covered.join(", ")])
        .collect();
    print_table(headers, rows);
    Ok(())
}

fn run_show(root: &Path, name: &str) -> Result<()> {
    let (store, _) = super::open_store(root)?;
    print_json(store.owner(name)?)
}

fn run_edit(root: &Path, name: &str, data: &str, json: bool) -> Result<()> {
    let partial: Value =
        serde_json::from_str(data).map_err(|e| anyhow!("--data is not valid JSON: {e}"))?;
    if !partial.is_object() {
        return Err(anyhow!("--data must be a JSON object"));
    }

    let (mut store, path) = super::open_store(root)?;
    store.upsert_owner(name, &partial)?;
    store.save(&path)?;

    if json {
        print_json(store.owner(name)?)?;
    } else {
        println!("Updated business owner '{name}'");
    }
    Ok(())
}

use crate::output::{print_json, print_table};
use anyhow::{anyhow, Result};
use clap::Subcommand;
use serde_json::{json, Value};
use std::path::Path;
use workshop_core::slug;

// ---------------------------------------------------------------------------
// Subcommand definition
// ---------------------------------------------------------------------------

#[derive(Subcommand, Debug)]
pub enum ProductSubcommand {
    /// List all products
    List,
    /// Show a full product record
    Show { slug: String },
    /// Add a new product (slug derived from the name)
    Add {
        /// Product name, e.g. "Acme Tool"
        name: String,
        #[arg(long)]
        workstream: Option<String>,
        #[arg(long)]
        business_owner: Option<String>,
        #[arg(long)]
        existing_users: Option<String>,
        #[arg(long)]
        primary_operator: Option<String>,
        #[arg(long)]
        primary_developer: Option<String>,
    },
    /// Merge a JSON partial into a product record
    Edit {
        slug: String,
        /// JSON object to deep-merge, e.g. '{"workstream": "Geology"}'
        #[arg(long)]
        data: String,
    },
    /// Delete a product record
    Delete {
        slug: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcommand: ProductSubcommand, json: bool) -> Result<()> {
    match subcommand {
        ProductSubcommand::List => run_list(root, json),
        ProductSubcommand::Show { slug } => run_show(root, &slug, json),
        ProductSubcommand::Add {
            name,
            workstream,
            business_owner,
            existing_users,
            primary_operator,
            primary_developer,
        } => run_add(
            root,
            &name,
            json!({
                "workstream": workstream.unwrap_or_default(),
                "business_owner": business_owner.unwrap_or_default(),
                "existing_users": existing_users.unwrap_or_default(),
                "primary_operator": primary_operator.unwrap_or_default(),
                "primary_developer": primary_developer.unwrap_or_default(),
            }),
            json,
        ),
        ProductSubcommand::Edit { slug, data } => run_edit(root, &slug, &data, json),
        ProductSubcommand::Delete { slug, yes } => run_delete(root, &slug, yes),
    }
}

// ---------------------------------------------------------------------------
// list / show
// ---------------------------------------------------------------------------

fn run_list(root: &Path, json: bool) -> Result<()> {
    let (store, _) = super::open_store(root)?;

    if json {
        let rows: Vec<Value> = store
            .products
            .values()
            .map(|p| {
                json!({
                    "product_id": p.product_id,
                    "product_name": p.product_name,
                    "workstream": p.workstream,
                    "business_owner": p.business_owner,
                })
            })
            .collect();
        return print_json(&rows);
    }

    if store.products.is_empty() {
        println!("No products. Add one with `workshop product add <name>`.");
        return Ok(());
    }

    let headers = &["SLUG", "NAME", "WORKSTREAM", "OWNER"];
    let rows: Vec<Vec<String>> = store
        .products
        .values()
        .map(|p| {
            vec![
                p.product_id.clone(),
                p.product_name.clone(),
                p.workstream.clone(),
                p.business_owner.clone(),
            ]
        })
        .collect();
    print_table(headers, rows);
    Ok(())
}

fn run_show(root: &Path, slug: &str, _json: bool) -> Result<()> {
    let (store, _) = super::open_store(root)?;
    let record = store.product(slug)?;
    // Records are deeply nested; JSON is the only sane rendering.
    print_json(record)
}

// ---------------------------------------------------------------------------
// add / edit / delete
// ---------------------------------------------------------------------------

fn run_add(root: &Path, name: &str, extra: Value, json: bool) -> Result<()> {
    let name = name.trim();
    let id = slug::slugify(name);
    if id.is_empty() {
        return Err(workshop_core::WorkshopError::InvalidProductName(name.to_string()).into());
    }

    let (mut store, path) = super::open_store(root)?;
    if store.products.contains_key(&id) {
        return Err(anyhow!("product '{id}' already exists"));
    }

    let mut partial = extra;
    if let Some(map) = partial.as_object_mut() {
        map.insert("product_id".to_string(), json!(id));
        map.insert("product_name".to_string(), json!(name));
    }
    store.upsert_product(&id, &partial)?;
    store.save(&path)?;

    if json {
        print_json(&json!({ "product_id": id }))?;
    } else {
        println!("Created product '{name}' ({id})");
    }
    Ok(())
}

fn run_edit(root: &Path, slug: &str, data: &str, json: bool) -> Result<()> {
    let partial: Value =
        serde_json::from_str(data).map_err(|e| anyhow!("--data is not valid JSON: {e}"))?;
    if !partial.is_object() {
        return Err(anyhow!("--data must be a JSON object"));
    }

    let (mut store, path) = super::open_store(root)?;
    store.product(slug)?;
    store.upsert_product(slug, &partial)?;
    store.save(&path)?;

    if json {
        print_json(store.product(slug)?)?;
    } else {
        println!("Updated product '{slug}'");
    }
    Ok(())
}

fn run_delete(root: &Path, slug: &str, yes: bool) -> Result<()> {
    let (mut store, path) = super::open_store(root)?;
    let record = store.product(slug)?;

    if !yes {
        return Err(anyhow!(
            "refusing to delete '{}' without --yes",
            record.product_name
        ));
    }

    store.remove_product(slug);
    store.save(&path)?;
    println!("Deleted product '{slug}'");
    Ok(())
}

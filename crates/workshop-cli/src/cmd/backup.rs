use anyhow::{anyhow, Result};
use chrono::Utc;
use clap::Subcommand;
use std::path::{Path, PathBuf};
use workshop_core::backup;

#[derive(Subcommand, Debug)]
pub enum BackupSubcommand {
    /// Write a timestamped backup of the aggregated store
    Export {
        /// Destination file (default: aggregated-backup-<timestamp>.json in cwd)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Replace the aggregated store with a backup file
    Restore {
        /// Backup file produced by `workshop backup export`
        file: PathBuf,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

pub fn run(root: &Path, subcommand: BackupSubcommand) -> Result<()> {
    match subcommand {
        BackupSubcommand::Export { output } => run_export(root, output),
        BackupSubcommand::Restore { file, yes } => run_restore(root, &file, yes),
    }
}

fn run_export(root: &Path, output: Option<PathBuf>) -> Result<()> {
    let (store, _) = super::open_store(root)?;
    let content = backup::export(&store)?;
    let path = output.unwrap_or_else(|| PathBuf::from(backup::backup_filename(Utc::now())));
    workshop_core::io::atomic_write(&path, content.as_bytes())?;
    println!(
        "Backed up {} product(s), {} owner(s) to {}",
        store.products.len(),
        store.business_owners.len(),
        path.display()
    );
    Ok(())
}

fn run_restore(root: &Path, file: &Path, yes: bool) -> Result<()> {
    let content = std::fs::read_to_string(file)?;
    let restored = backup::restore(&content)?;

    if !yes {
        return Err(anyhow!(
            "restore replaces the current store with {} products, {} owners; pass --yes to proceed",
            restored.products.len(),
            restored.business_owners.len()
        ));
    }

    // Path resolved without loading the current store: restore must work
    // even when the store on disk is corrupt.
    let config = workshop_core::config::Config::load(root)?;
    let store_path = workshop_core::paths::store_path(root, &config);
    restored.save(&store_path)?;
    println!(
        "Restored {} product(s), {} owner(s) from {}",
        restored.products.len(),
        restored.business_owners.len(),
        file.display()
    );
    Ok(())
}

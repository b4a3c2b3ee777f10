use anyhow::Result;
use std::path::Path;
use workshop_core::config::Config;
use workshop_core::{io, paths};

/// Scaffold `.workshop/`, the data directory, and the uploads directory.
pub fn run(root: &Path, project: Option<&str>) -> Result<()> {
    let name = match project {
        Some(n) => n.to_string(),
        None => root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "workshop".to_string()),
    };

    let config_path = paths::config_path(root);
    if config_path.exists() {
        anyhow::bail!("already initialized: {} exists", config_path.display());
    }

    let config = Config::new(&name);
    io::ensure_dir(&paths::workshop_dir(root))?;
    io::ensure_dir(&root.join(paths::DATA_DIR))?;
    io::ensure_dir(&root.join(paths::UPLOADS_DIR))?;
    config.save(root)?;

    println!("Initialized workshop project '{name}' in {}", root.display());
    println!("  config:  {}", config_path.display());
    println!("  store:   {}", paths::store_path(root, &config).display());
    println!("  catalog: {}", paths::catalog_path(root, &config).display());
    Ok(())
}

use crate::error::Result;
use crate::paths;
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

/// Project configuration, persisted at `.workshop/config.yaml`.
///
/// Every field has a default so a missing config file is equivalent to the
/// stock setup; the tool works on first run without `workshop init`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub project: String,
    /// Aggregated store location, relative to the project root.
    pub store_file: String,
    /// Product catalog CSV consumed by `workshop import`.
    pub catalog_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            project: "workshop".to_string(),
            store_file: paths::DEFAULT_STORE_FILE.to_string(),
            catalog_file: paths::DEFAULT_CATALOG_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn new(project: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            ..Self::default()
        }
    }

    /// Load the config, falling back to defaults when the file is absent.
    pub fn load(root: &Path) -> Result<Self> {
        let path = paths::config_path(root);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&data)?;
        Ok(config)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let path = paths::config_path(root);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&path, data.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.store_file, "data/aggregated.json");
        assert_eq!(config.catalog_file, "uploads/product-catalog.csv");
    }

    #[test]
    fn save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let mut config = Config::new("interview-notes");
        config.catalog_file = "uploads/catalog-2024.csv".to_string();
        config.save(dir.path()).unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.project, "interview-notes");
        assert_eq!(loaded.catalog_file, "uploads/catalog-2024.csv");
    }

    #[test]
    fn partial_yaml_fills_defaults() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join(".workshop")).unwrap();
        std::fs::write(
            dir.path().join(".workshop/config.yaml"),
            "project: partial\n",
        )
        .unwrap();

        let loaded = Config::load(dir.path()).unwrap();
        assert_eq!(loaded.project, "partial");
        assert_eq!(loaded.store_file, "data/aggregated.json");
    }
}

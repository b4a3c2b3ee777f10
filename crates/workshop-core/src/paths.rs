use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const WORKSHOP_DIR: &str = ".workshop";
pub const CONFIG_FILE: &str = ".workshop/config.yaml";

pub const DATA_DIR: &str = "data";
pub const UPLOADS_DIR: &str = "uploads";

pub const DEFAULT_STORE_FILE: &str = "data/aggregated.json";
pub const DEFAULT_CATALOG_FILE: &str = "uploads/product-catalog.csv";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn workshop_dir(root: &Path) -> PathBuf {
    root.join(WORKSHOP_DIR)
}

pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILE)
}

pub fn store_path(root: &Path, config: &crate::config::Config) -> PathBuf {
    root.join(&config.store_file)
}

pub fn catalog_path(root: &Path, config: &crate::config::Config) -> PathBuf {
    root.join(&config.catalog_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_helpers_join_root() {
        let root = Path::new("/tmp/proj");
        let config = crate::config::Config::default();
        assert_eq!(
            config_path(root),
            PathBuf::from("/tmp/proj/.workshop/config.yaml")
        );
        assert_eq!(
            store_path(root, &config),
            PathBuf::from("/tmp/proj/data/aggregated.json")
        );
        assert_eq!(
            catalog_path(root, &config),
            PathBuf::from("/tmp/proj/uploads/product-catalog.csv")
        );
    }
}

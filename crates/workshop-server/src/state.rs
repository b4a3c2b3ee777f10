use std::path::{Path, PathBuf};
use workshop_core::config::Config;
use workshop_core::store::Store;

/// Shared application state passed to all route handlers.
#[derive(Clone)]
pub struct AppState {
    pub root: PathBuf,
}

impl AppState {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

/// Load the store plus the path to write it back to. Every handler does a
/// whole-document read-modify-write through this pair.
pub fn open_store(root: &Path) -> workshop_core::Result<(Store, PathBuf)> {
    let config = Config::load(root)?;
    let path = workshop_core::paths::store_path(root, &config);
    let store = Store::load(&path)?;
    Ok((store, path))
}

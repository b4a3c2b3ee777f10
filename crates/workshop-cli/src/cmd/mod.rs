pub mod backup;
pub mod export;
pub mod import;
pub mod init;
pub mod owner;
pub mod product;
pub mod ui;

use std::path::{Path, PathBuf};
use workshop_core::config::Config;
use workshop_core::store::Store;

/// Load the store plus the path it saves back to.
pub(crate) fn open_store(root: &Path) -> workshop_core::Result<(Store, PathBuf)> {
    let config = Config::load(root)?;
    let path = workshop_core::paths::store_path(root, &config);
    let store = Store::load(&path)?;
    Ok((store, path))
}

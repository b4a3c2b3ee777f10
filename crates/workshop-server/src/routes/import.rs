use axum::extract::State;
use axum::Json;
use serde_json::Value;
use workshop_core::config::Config;
use workshop_core::{catalog, paths, WorkshopError};

use crate::error::AppError;
use crate::state::{open_store, AppState};

/// Pull any catalog rows not yet in the store. Existing records are never
/// touched; owner coverage is recomputed for every owner the new rows name.
pub async fn run(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let root = state.root.clone();
    let summary = tokio::task::spawn_blocking(move || {
        let config = Config::load(&root)?;
        let rows = catalog::read_catalog(&paths::catalog_path(&root, &config));
        let (mut store, path) = open_store(&root)?;
        let summary = catalog::import(&mut store, &rows)?;
        store.save(&path)?;
        Ok::<_, WorkshopError>(summary)
    })
    .await??;
    Ok(Json(serde_json::to_value(summary)?))
}

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Utc;
use serde_json::{json, Value};
use workshop_core::{backup, WorkshopError};

use crate::error::AppError;
use crate::state::{open_store, AppState};
use workshop_core::config::Config;
use workshop_core::paths;

/// Download the whole store as a timestamped JSON attachment.
pub async fn download(State(state): State<AppState>) -> Result<Response, AppError> {
    let root = state.root.clone();
    let body = tokio::task::spawn_blocking(move || {
        let (store, _) = open_store(&root)?;
        backup::export(&store)
    })
    .await??;

    let filename = backup::backup_filename(Utc::now());
    let headers = [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];
    Ok((headers, body).into_response())
}

/// Replace the store wholesale with an uploaded backup. Validation happens
/// before anything is written, so a bad upload leaves the store as it was.
pub async fn restore(
    State(state): State<AppState>,
    body: String,
) -> Result<Json<Value>, AppError> {
    let root = state.root.clone();
    let counts = tokio::task::spawn_blocking(move || {
        let store = backup::restore(&body).map_err(|e| match e {
            WorkshopError::Json(_) => {
                WorkshopError::InvalidBackup("could not parse backup file".to_string())
            }
            other => other,
        })?;
        // Path resolved without loading the current store: restore must
        // work even when the store on disk is corrupt.
        let config = Config::load(&root)?;
        let path = paths::store_path(&root, &config);
        store.save(&path)?;
        Ok::<_, WorkshopError>(json!({
            "products": store.products.len(),
            "business_owners": store.business_owners.len(),
        }))
    })
    .await??;
    Ok(Json(counts))
}

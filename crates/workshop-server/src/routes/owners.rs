use axum::extract::{Path, State};
use axum::Json;
use serde_json::{json, Value};
use workshop_core::WorkshopError;

use crate::error::AppError;
use crate::state::{open_store, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let root = state.root.clone();
    let summaries = tokio::task::spawn_blocking(move || {
        let (store, _) = open_store(&root)?;
        let rows: Vec<Value> = store
            .business_owners
            .values()
            .map(|o| {
                json!({
                    "owner_name": o.owner_name,
                    "products_covered": o.products_covered,
                })
            })
            .collect();
        Ok::<_, WorkshopError>(rows)
    })
    .await??;
    Ok(Json(json!({ "business_owners": summaries })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, AppError> {
    let root = state.root.clone();
    let record = tokio::task::spawn_blocking(move || {
        let (store, _) = open_store(&root)?;
        let record = store.owner(&name)?.clone();
        Ok::<_, WorkshopError>(record)
    })
    .await??;
    Ok(Json(serde_json::to_value(record)?))
}

/// Owner names are map keys verbatim; a PUT for an unseen name creates the
/// record from the blank template.
pub async fn update(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let root = state.root.clone();
    let updated = tokio::task::spawn_blocking(move || {
        let (mut store, path) = open_store(&root)?;
        store.upsert_owner(&name, &body)?;
        store.save(&path)?;
        Ok::<_, WorkshopError>(json!({ "owner_name": name }))
    })
    .await??;
    Ok(Json(updated))
}

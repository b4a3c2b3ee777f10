use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use workshop_core::{slug, WorkshopError};

use crate::error::{AppError, ConfirmationRequired};
use crate::state::{open_store, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let root = state.root.clone();
    let summaries = tokio::task::spawn_blocking(move || {
        let (store, _) = open_store(&root)?;
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
        Ok::<_, WorkshopError>(rows)
    })
    .await??;
    Ok(Json(json!({ "products": summaries })))
}

pub async fn get(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Value>, AppError> {
    let root = state.root.clone();
    let record = tokio::task::spawn_blocking(move || {
        let (store, _) = open_store(&root)?;
        let record = store.product(&slug)?.clone();
        Ok::<_, WorkshopError>(record)
    })
    .await??;
    Ok(Json(serde_json::to_value(record)?))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let root = state.root.clone();
    let created = tokio::task::spawn_blocking(move || {
        let name = body
            .get("product_name")
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string();
        let id = slug::slugify(&name);
        if id.is_empty() {
            return Err(WorkshopError::InvalidProductName(name));
        }

        let (mut store, path) = open_store(&root)?;
        let mut partial = body;
        if let Some(map) = partial.as_object_mut() {
            map.insert("product_id".to_string(), json!(id));
            map.insert("product_name".to_string(), json!(name));
        }
        store.upsert_product(&id, &partial)?;
        store.save(&path)?;
        Ok(json!({ "product_id": id }))
    })
    .await??;
    Ok(Json(created))
}

pub async fn update(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, AppError> {
    let root = state.root.clone();
    let updated = tokio::task::spawn_blocking(move || {
        let (mut store, path) = open_store(&root)?;
        if !store.products.contains_key(&slug) {
            return Err(WorkshopError::ProductNotFound(slug));
        }
        store.upsert_product(&slug, &body)?;
        store.save(&path)?;
        Ok(json!({ "product_id": slug }))
    })
    .await??;
    Ok(Json(updated))
}

#[derive(Deserialize)]
pub struct DeleteQuery {
    #[serde(default)]
    pub confirm: bool,
}

pub async fn delete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Query(query): Query<DeleteQuery>,
) -> Result<Json<Value>, AppError> {
    let root = state.root.clone();
    let deleted = tokio::task::spawn_blocking(move || {
        let (mut store, path) = open_store(&root)?;
        let record = store.product(&slug)?;
        if !query.confirm {
            return Err(AppError::from(ConfirmationRequired(format!(
                "pass confirm=true to delete '{}'",
                record.product_name
            ))));
        }
        store.remove_product(&slug);
        store.save(&path)?;
        Ok(json!({ "deleted": slug }))
    })
    .await??;
    Ok(Json(deleted))
}

use axum::Json;
use serde_json::Value;
use workshop_core::owner::OwnerRecord;
use workshop_core::product::ProductRecord;

use crate::error::AppError;

/// Blank record shapes. The UI builds its forms from these, so the Rust
/// types stay the single authority on the questionnaire structure.
pub async fn product() -> Result<Json<Value>, AppError> {
    Ok(Json(serde_json::to_value(ProductRecord::template())?))
}

pub async fn owner() -> Result<Json<Value>, AppError> {
    Ok(Json(serde_json::to_value(OwnerRecord::template())?))
}

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use workshop_core::export;

use crate::error::AppError;
use crate::state::{open_store, AppState};

pub async fn products_csv(State(state): State<AppState>) -> Result<Response, AppError> {
    let root = state.root.clone();
    let body = tokio::task::spawn_blocking(move || {
        let (store, _) = open_store(&root)?;
        export::products_csv(&store)
    })
    .await??;

    let headers = [
        (header::CONTENT_TYPE, "text/csv".to_string()),
        (
            header::CONTENT_DISPOSITION,
            "attachment; filename=\"all-products.csv\"".to_string(),
        ),
    ];
    Ok((headers, body).into_response())
}

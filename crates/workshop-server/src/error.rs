use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use workshop_core::WorkshopError;

/// Deleting a record requires an explicit confirmation flag; the first
/// request without one gets a 409 describing what would be removed.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct ConfirmationRequired(pub String);

/// Error wrapper for route handlers: anything `anyhow`-compatible can be
/// bubbled up with `?` and mapped to a status code at the boundary.
pub struct AppError(anyhow::Error);

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.0.downcast_ref::<ConfirmationRequired>().is_some() {
            StatusCode::CONFLICT
        } else {
            match self.0.downcast_ref::<WorkshopError>() {
                Some(WorkshopError::ProductNotFound(_))
                | Some(WorkshopError::OwnerNotFound(_)) => StatusCode::NOT_FOUND,
                Some(WorkshopError::InvalidProductName(_))
                | Some(WorkshopError::InvalidBackup(_)) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            }
        };
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            status_of(WorkshopError::ProductNotFound("x".into()).into()),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            status_of(WorkshopError::OwnerNotFound("x".into()).into()),
            StatusCode::NOT_FOUND
        );
    }

    #[test]
    fn validation_errors_map_to_400() {
        assert_eq!(
            status_of(WorkshopError::InvalidProductName("!!".into()).into()),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_of(WorkshopError::InvalidBackup("bad".into()).into()),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn confirmation_maps_to_409() {
        assert_eq!(
            status_of(ConfirmationRequired("delete acme?".into()).into()),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn other_errors_map_to_500() {
        assert_eq!(
            status_of(anyhow::anyhow!("boom").into()),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}

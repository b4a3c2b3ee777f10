pub mod embed;
pub mod error;
pub mod routes;
pub mod state;

use axum::routing::{delete, get, post, put};
use axum::Router;
use std::path::PathBuf;
use tower_http::cors::{Any, CorsLayer};

/// Build the axum Router with all API routes and middleware.
/// Used by `serve()` and available for integration testing.
pub fn build_router(root: PathBuf) -> Router {
    let app_state = state::AppState::new(root);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Products
        .route("/api/products", get(routes::products::list))
        .route("/api/products", post(routes::products::create))
        .route("/api/products/{slug}", get(routes::products::get))
        .route("/api/products/{slug}", put(routes::products::update))
        .route("/api/products/{slug}", delete(routes::products::delete))
        // Business owners
        .route("/api/owners", get(routes::owners::list))
        .route("/api/owners/{name}", get(routes::owners::get))
        .route("/api/owners/{name}", put(routes::owners::update))
        // Catalog import
        .route("/api/import", post(routes::import::run))
        // Backup / restore
        .route("/api/backup", get(routes::backup::download))
        .route("/api/restore", post(routes::backup::restore))
        // CSV export
        .route("/api/export/products.csv", get(routes::export::products_csv))
        // Blank record shapes for form generation
        .route("/api/templates/product", get(routes::templates::product))
        .route("/api/templates/owner", get(routes::templates::owner))
        .fallback(embed::static_handler)
        .layer(cors)
        .with_state(app_state)
}

/// Start the workshop web UI server.
pub async fn serve(root: PathBuf, port: u16, open_browser: bool) -> anyhow::Result<()> {
    let app = build_router(root);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("workshop UI server listening on http://localhost:{port}");

    if open_browser {
        let url = format!("http://localhost:{port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

/// Start the server on a pre-bound listener.
///
/// Unlike `serve`, this accepts a `TcpListener` that was already bound so the
/// caller can read the actual port before starting (useful when `port = 0` and
/// the OS picks a free port).
pub async fn serve_on(
    root: PathBuf,
    listener: tokio::net::TcpListener,
    open_browser: bool,
) -> anyhow::Result<()> {
    let actual_port = listener.local_addr()?.port();
    let app = build_router(root);

    tracing::info!("workshop UI server listening on http://localhost:{actual_port}");

    if open_browser {
        let url = format!("http://localhost:{actual_port}");
        let _ = open::that(&url);
    }

    axum::serve(listener, app).await?;
    Ok(())
}

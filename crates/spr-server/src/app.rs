//! Full application router: API under `/api`, static frontend everywhere else.

use axum::Router;
use spr_config::SprConfig;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::routes::{AppState, api_router};

/// Mount point of the JSON API.
pub const API_PREFIX: &str = "/api";

/// Build the router served by the `spr` binary.
///
/// If the frontend directory is missing only the API is served and every other
/// path falls through to the default 404.
pub fn build_app(svc: AppState, config: &SprConfig) -> Router {
    let mut app = Router::new().nest(API_PREFIX, api_router(svc));

    if config.frontend.is_present() {
        let frontend = ServeDir::new(&config.frontend.dir)
            .fallback(ServeFile::new(config.frontend.index_file()));
        app = app.fallback_service(frontend);
        tracing::debug!(dir = %config.frontend.dir.display(), "serving frontend");
    } else {
        tracing::warn!(
            dir = %config.frontend.dir.display(),
            "frontend directory not found, serving API only"
        );
    }

    if config.server.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    app.layer(TraceLayer::new_for_http())
}

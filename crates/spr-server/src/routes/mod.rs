//! Entity routes.
//!
//! Each module contributes a `router()` over the shared service; paths are
//! bare (`/students`), the caller decides where to mount them.

mod dashboard;
mod internships;
mod offers;
mod reports;
mod students;

use std::sync::Arc;

use axum::Router;
use axum::http::Uri;
use spr_db::service::SprService;

use crate::error::ApiError;

/// Shared handler state.
pub type AppState = Arc<SprService>;

/// All entity endpoints, bound to `svc`.
pub fn api_router(svc: AppState) -> Router {
    Router::new()
        .merge(students::router())
        .merge(offers::router())
        .merge(internships::router())
        .merge(reports::router())
        .merge(dashboard::router())
        .fallback(unknown_endpoint)
        .with_state(svc)
}

async fn unknown_endpoint(uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no endpoint at {}", uri.path()))
}

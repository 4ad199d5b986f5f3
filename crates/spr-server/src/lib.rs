//! # spr-server
//!
//! JSON HTTP API over the SPR store.
//!
//! [`routes::api_router`] exposes the entity endpoints at their bare paths
//! (`/students`, `/offers/{id}`, ...). [`app::build_app`] mounts them under
//! `/api`, adds CORS and request tracing, and serves the static frontend for
//! every other path.

pub mod app;
pub mod error;
pub mod payloads;
pub mod routes;

pub use app::build_app;

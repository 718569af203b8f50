//! The iljeong event server.
//!
//! Holds the event list in memory and exposes it over a small REST API.
//! The binary wires this router to a TCP listener; tests drive it
//! against an ephemeral port.

pub mod config;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};

use crate::state::AppState;

/// Build the full application router, CORS included.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::events::router())
        .with_state(state)
        .layer(cors)
}

//! Axum router construction for the fleet tracker API.
//!
//! Assembles all REST routes into a single [`Router`] with CORS
//! middleware enabled for cross-origin dashboard access.

use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the API server.
///
/// The router includes:
/// - `GET /api/sailing/active` -- the calling captain's active voyage
/// - `POST /api/sailing/position` -- record a position fix
/// - `PUT /api/sailing/active/status` -- toggle Docked/Sailing
/// - `PUT /api/sailing/active/complete` -- finish the active voyage
/// - `POST /api/voyages` -- register a new voyage
/// - `GET /api/voyages/{id}` -- fetch one voyage
/// - `PUT /api/voyages/{id}/cancel` -- abandon a voyage
///
/// CORS is configured to allow any origin for development. In
/// production this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Captain-scoped operations
        .route("/api/sailing/active", get(handlers::active_voyage))
        .route("/api/sailing/position", post(handlers::submit_position))
        .route("/api/sailing/active/status", put(handlers::update_status))
        .route(
            "/api/sailing/active/complete",
            put(handlers::complete_voyage),
        )
        // Voyage registry
        .route("/api/voyages", post(handlers::create_voyage))
        .route("/api/voyages/{id}", get(handlers::get_voyage))
        .route("/api/voyages/{id}/cancel", put(handlers::cancel_voyage))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

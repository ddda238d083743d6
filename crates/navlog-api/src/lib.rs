//! Captain-facing HTTP API for the Navlog fleet tracker.
//!
//! Thin Axum surface over the [`navlog_sailing`] coordinator and the
//! [`navlog_db`] stores. The server does no business logic of its own:
//! handlers extract the caller's account identity, delegate, and map the
//! outcome to an HTTP status.
//!
//! # Modules
//!
//! - [`config`] -- environment-driven configuration
//! - [`identity`] -- the `x-account-id` caller extractor
//! - [`handlers`] -- REST endpoint handlers
//! - [`router`] -- route assembly and middleware
//! - [`server`] -- TCP bind and serve loop
//! - [`state`] -- shared application state
//! - [`error`] -- HTTP error mapping

pub mod config;
pub mod error;
pub mod handlers;
pub mod identity;
pub mod router;
pub mod server;
pub mod state;

pub use config::AppConfig;
pub use error::ApiError;
pub use router::build_router;
pub use server::{start_server, ServerConfig, ServerError};
pub use state::AppState;

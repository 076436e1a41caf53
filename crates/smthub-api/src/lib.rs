//! # smthub-api
//!
//! HTTP API layer for SMT Hub built on Axum.
//!
//! Provides the REST endpoints, the JWT resolution middleware, role
//! extractors, DTOs, and error mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;

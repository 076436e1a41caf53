//! Route definitions for the SMT Hub HTTP API.
//!
//! All routes are mounted under `/api`. The JWT middleware runs on every
//! request and installs the identity when a valid token is present;
//! per-route extractors enforce authentication and the admin role.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::middleware::cors::build_cors_layer;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(dashboard_routes())
        .merge(floor_routes())
        .merge(line_routes())
        .merge(machine_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(axum_middleware::from_fn_with_state(
            state.clone(),
            middleware::auth::authenticate,
        ))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Dashboard summary
fn dashboard_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(handlers::dashboard::summary))
}

/// Floor CRUD and child listing
fn floor_routes() -> Router<AppState> {
    Router::new()
        .route("/floors", get(handlers::floor::list))
        .route("/floors", post(handlers::floor::create))
        .route("/floors/{id}", get(handlers::floor::get))
        .route("/floors/{id}", put(handlers::floor::update))
        .route("/floors/{id}", delete(handlers::floor::delete))
        .route("/floors/{id}/cascade", delete(handlers::floor::cascade_delete))
        .route("/floors/{id}/lines", get(handlers::floor::lines))
        .route("/floors/{id}/lines", post(handlers::floor::add_line))
}

/// Line CRUD and child listing
fn line_routes() -> Router<AppState> {
    Router::new()
        .route("/lines", get(handlers::line::list))
        .route("/lines", post(handlers::line::create))
        .route("/lines/{id}", get(handlers::line::get))
        .route("/lines/{id}", put(handlers::line::update))
        .route("/lines/{id}", delete(handlers::line::delete))
        .route("/lines/{id}/cascade", delete(handlers::line::cascade_delete))
        .route("/lines/{id}/machines", get(handlers::line::machines))
        .route("/lines/{id}/machines", post(handlers::line::add_machine))
}

/// Machine CRUD, keyed by serial number
fn machine_routes() -> Router<AppState> {
    Router::new()
        .route("/machines", get(handlers::machine::list))
        .route("/machines", post(handlers::machine::create))
        .route("/machines/{serial}", get(handlers::machine::get))
        .route("/machines/{serial}", put(handlers::machine::update))
        .route("/machines/{serial}", delete(handlers::machine::delete))
}

/// Health check endpoint (no auth required)
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

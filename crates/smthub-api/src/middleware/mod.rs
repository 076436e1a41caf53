//! Tower middleware for the HTTP API.

pub mod auth;
pub mod cors;

//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod dashboard;
pub mod floor;
pub mod health;
pub mod line;
pub mod machine;

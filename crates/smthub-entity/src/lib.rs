//! # smthub-entity
//!
//! Domain entity models for SMT Hub. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod floor;
pub mod line;
pub mod machine;
pub mod user;

/// Maximum number of direct children per parent in the factory hierarchy:
/// a floor holds at most this many lines, a line at most this many machines.
pub const MAX_CHILDREN_PER_PARENT: u64 = 10;

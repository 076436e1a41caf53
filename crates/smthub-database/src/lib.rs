//! # smthub-database
//!
//! PostgreSQL connection management, embedded migrations, startup seed
//! data, and concrete repository implementations for all SMT Hub entities.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod seed;

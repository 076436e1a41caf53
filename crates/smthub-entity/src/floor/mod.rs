//! Factory floor entity — the top of the Floor → Line → Machine hierarchy.

pub mod model;

pub use model::{CreateFloor, Floor, FloorFilter, UpdateFloor};

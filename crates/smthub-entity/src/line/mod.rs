//! Production line entity — the middle of the hierarchy, owned by a floor.

pub mod direction;
pub mod lane;
pub mod model;

pub use direction::LineDirection;
pub use lane::LaneType;
pub use model::{CreateLine, Line, LineFilter, UpdateLine};

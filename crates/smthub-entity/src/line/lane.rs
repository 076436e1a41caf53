//! Lane type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical lane layout of a production line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "lane_type", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum LaneType {
    /// Single conveyor lane.
    Single,
    /// Dual parallel conveyor lanes.
    Dual,
}

impl LaneType {
    /// Return the lane type as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Dual => "dual",
        }
    }
}

impl fmt::Display for LaneType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

//! Line flow direction enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board flow direction along a production line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "line_direction", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum LineDirection {
    /// Boards travel left to right.
    LeftToRight,
    /// Boards travel right to left.
    RightToLeft,
}

impl LineDirection {
    /// Return the direction as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftToRight => "left_to_right",
            Self::RightToLeft => "right_to_left",
        }
    }
}

impl fmt::Display for LineDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

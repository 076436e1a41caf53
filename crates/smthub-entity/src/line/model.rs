//! Line entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::{LaneType, LineDirection};

/// A production line on a floor. Holds at most
/// [`MAX_CHILDREN_PER_PARENT`](crate::MAX_CHILDREN_PER_PARENT) machines.
///
/// The owning floor is referenced by `floor_id` only; the floor never
/// holds an owning pointer back to its lines.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Line {
    /// Unique line identifier.
    pub id: Uuid,
    /// Globally unique line name.
    pub name: String,
    /// Lane layout.
    pub lane: LaneType,
    /// Board flow direction.
    pub direction: LineDirection,
    /// The floor this line belongs to.
    pub floor_id: Uuid,
    /// When the line was created.
    pub created_at: DateTime<Utc>,
    /// When the line was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateLine {
    /// Line name.
    pub name: String,
    /// Lane layout.
    pub lane: LaneType,
    /// Board flow direction.
    pub direction: LineDirection,
    /// Owning floor.
    pub floor_id: Uuid,
}

/// Data for updating an existing line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateLine {
    /// New line name.
    pub name: String,
    /// New lane layout.
    pub lane: LaneType,
    /// New board flow direction.
    pub direction: LineDirection,
    /// New owning floor.
    pub floor_id: Uuid,
}

/// Optional filters for line listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LineFilter {
    /// Case-insensitive substring match on the name.
    pub name: Option<String>,
    /// Exact lane type match.
    pub lane: Option<LaneType>,
    /// Exact direction match.
    pub direction: Option<LineDirection>,
    /// Restrict to lines of one floor.
    pub floor_id: Option<Uuid>,
}

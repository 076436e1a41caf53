//! Floor entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A factory floor. Holds at most
/// [`MAX_CHILDREN_PER_PARENT`](crate::MAX_CHILDREN_PER_PARENT) lines.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Floor {
    /// Unique floor identifier.
    pub id: Uuid,
    /// Globally unique floor name.
    pub name: String,
    /// When the floor was created.
    pub created_at: DateTime<Utc>,
    /// When the floor was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFloor {
    /// Floor name.
    pub name: String,
}

/// Data for updating an existing floor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateFloor {
    /// New floor name.
    pub name: String,
}

/// Optional filters for floor listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FloorFilter {
    /// Case-insensitive substring match on the name.
    pub name: Option<String>,
}

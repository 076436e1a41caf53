//! Machine entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::MachineType;

/// An SMT machine installed on a line.
///
/// The serial number is the immutable identity; the owning line is
/// referenced by `line_id` only.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Machine {
    /// Globally unique serial number (identity, immutable).
    pub serial: String,
    /// Model designation.
    pub model: String,
    /// Kind of machine.
    pub machine_type: MachineType,
    /// Year of manufacture.
    pub year: i32,
    /// Manufacturing company.
    pub manufacturer: String,
    /// Optional photo of the machine.
    #[serde(skip_serializing)]
    pub image: Option<Vec<u8>>,
    /// The line this machine belongs to.
    pub line_id: Uuid,
    /// When the machine was registered.
    pub created_at: DateTime<Utc>,
    /// When the machine was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Machine {
    /// Whether a photo is stored for this machine.
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

/// Data required to register a new machine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMachine {
    /// Serial number.
    pub serial: String,
    /// Model designation.
    pub model: String,
    /// Kind of machine.
    pub machine_type: MachineType,
    /// Year of manufacture.
    pub year: i32,
    /// Manufacturing company.
    pub manufacturer: String,
    /// Optional photo bytes.
    pub image: Option<Vec<u8>>,
    /// Owning line.
    pub line_id: Uuid,
}

/// Data for updating an existing machine. The serial cannot change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateMachine {
    /// New model designation.
    pub model: String,
    /// New machine kind.
    pub machine_type: MachineType,
    /// New year of manufacture.
    pub year: i32,
    /// New manufacturing company.
    pub manufacturer: String,
    /// Replacement photo bytes (None keeps the stored photo).
    pub image: Option<Vec<u8>>,
    /// New owning line.
    pub line_id: Uuid,
}

/// Optional filters for machine listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MachineFilter {
    /// Case-insensitive substring match on the model.
    pub model: Option<String>,
    /// Exact machine type match.
    pub machine_type: Option<MachineType>,
    /// Exact year match.
    pub year: Option<i32>,
    /// Case-insensitive substring match on the manufacturer.
    pub manufacturer: Option<String>,
    /// Restrict to machines of one line.
    pub line_id: Option<Uuid>,
}

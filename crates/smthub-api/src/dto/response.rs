//! Response DTOs.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use smthub_entity::machine::{Machine, MachineType};
use smthub_service::DashboardSummary;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Bearer token, also set as a cookie.
    pub token: String,
    /// Token expiration.
    pub expires_at: DateTime<Utc>,
    /// Authenticated username.
    pub username: String,
    /// Granted authorities.
    pub authorities: Vec<String>,
}

/// Authenticated user summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Username.
    pub username: String,
    /// Granted authorities.
    pub authorities: Vec<String>,
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// Machine representation for responses.
///
/// List endpoints omit the image payload and only flag its presence;
/// the detail endpoint inlines it base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineResponse {
    /// Serial number.
    pub serial: String,
    /// Model designation.
    pub model: String,
    /// Machine category.
    pub machine_type: MachineType,
    /// Year of manufacture.
    pub year: i32,
    /// Manufacturer name.
    pub manufacturer: String,
    /// Whether a photo is stored.
    pub has_image: bool,
    /// Base64-encoded photo, detail responses only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Owning line.
    pub line_id: Uuid,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl MachineResponse {
    /// Builds a list-level response without the image payload.
    pub fn summary(machine: Machine) -> Self {
        Self::build(machine, false)
    }

    /// Builds a detail response with the image inlined.
    pub fn detail(machine: Machine) -> Self {
        Self::build(machine, true)
    }

    fn build(machine: Machine, include_image: bool) -> Self {
        let has_image = machine.has_image();
        let image = if include_image {
            machine.image.as_deref().map(|bytes| BASE64.encode(bytes))
        } else {
            None
        };

        Self {
            serial: machine.serial,
            model: machine.model,
            machine_type: machine.machine_type,
            year: machine.year,
            manufacturer: machine.manufacturer,
            has_image,
            image,
            line_id: machine.line_id,
            created_at: machine.created_at,
            updated_at: machine.updated_at,
        }
    }
}

/// Dashboard counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    /// Total floors.
    pub floors: u64,
    /// Total lines.
    pub lines: u64,
    /// Total machines.
    pub machines: u64,
}

impl From<DashboardSummary> for DashboardResponse {
    fn from(summary: DashboardSummary) -> Self {
        Self {
            floors: summary.floors,
            lines: summary.lines,
            machines: summary.machines,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Whether the database answered a probe query.
    pub database: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn machine_with_image() -> Machine {
        Machine {
            serial: "SN-1".to_string(),
            model: "NPM-W2".to_string(),
            machine_type: MachineType::PickAndPlace,
            year: 2021,
            manufacturer: "Panasonic".to_string(),
            image: Some(b"pixels".to_vec()),
            line_id: Uuid::new_v4(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn summary_flags_image_without_payload() {
        let resp = MachineResponse::summary(machine_with_image());
        assert!(resp.has_image);
        assert!(resp.image.is_none());
    }

    #[test]
    fn detail_inlines_image_as_base64() {
        let resp = MachineResponse::detail(machine_with_image());
        assert_eq!(resp.image.as_deref(), Some("cGl4ZWxz"));
    }

    #[test]
    fn detail_without_image_serializes_no_image_field() {
        let mut machine = machine_with_image();
        machine.image = None;
        let resp = MachineResponse::detail(machine);
        assert!(!resp.has_image);
        let json = serde_json::to_value(&resp).unwrap();
        assert!(json.get("image").is_none());
    }
}

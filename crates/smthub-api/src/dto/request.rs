//! Request DTOs with validation.

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use smthub_core::error::AppError;
use smthub_entity::floor::{CreateFloor, UpdateFloor};
use smthub_entity::line::{CreateLine, LaneType, LineDirection, UpdateLine};
use smthub_entity::machine::{CreateMachine, MachineType, UpdateMachine};

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Create floor request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFloorRequest {
    /// Floor name, unique across the plant.
    #[validate(length(min = 1, max = 80))]
    pub name: String,
}

impl CreateFloorRequest {
    /// Converts to the domain create model.
    pub fn into_model(self) -> CreateFloor {
        CreateFloor { name: self.name }
    }
}

/// Update floor request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateFloorRequest {
    /// New floor name.
    #[validate(length(min = 1, max = 80))]
    pub name: String,
}

impl UpdateFloorRequest {
    /// Converts to the domain update model.
    pub fn into_model(self) -> UpdateFloor {
        UpdateFloor { name: self.name }
    }
}

/// Create line request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateLineRequest {
    /// Line name, unique across the plant.
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    /// Lane layout.
    pub lane: LaneType,
    /// Flow direction.
    pub direction: LineDirection,
    /// Owning floor.
    pub floor_id: Uuid,
}

impl CreateLineRequest {
    /// Converts to the domain create model.
    pub fn into_model(self) -> CreateLine {
        CreateLine {
            name: self.name,
            lane: self.lane,
            direction: self.direction,
            floor_id: self.floor_id,
        }
    }
}

/// Add-line request for the nested floor endpoint; the owning floor
/// comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddLineRequest {
    /// Line name, unique across the plant.
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    /// Lane layout.
    pub lane: LaneType,
    /// Flow direction.
    pub direction: LineDirection,
}

impl AddLineRequest {
    /// Converts to the domain create model under the given floor.
    pub fn into_model(self, floor_id: Uuid) -> CreateLine {
        CreateLine {
            name: self.name,
            lane: self.lane,
            direction: self.direction,
            floor_id,
        }
    }
}

/// Update line request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateLineRequest {
    /// New line name.
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    /// Lane layout.
    pub lane: LaneType,
    /// Flow direction.
    pub direction: LineDirection,
    /// Owning floor; changing it moves the line.
    pub floor_id: Uuid,
}

impl UpdateLineRequest {
    /// Converts to the domain update model.
    pub fn into_model(self) -> UpdateLine {
        UpdateLine {
            name: self.name,
            lane: self.lane,
            direction: self.direction,
            floor_id: self.floor_id,
        }
    }
}

/// Create machine request. The image, when present, is base64-encoded.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateMachineRequest {
    /// Serial number, the machine's permanent identifier.
    #[validate(length(min = 1, max = 64))]
    pub serial: String,
    /// Model designation.
    #[validate(length(min = 1, max = 120))]
    pub model: String,
    /// Machine category.
    pub machine_type: MachineType,
    /// Year of manufacture.
    #[validate(range(min = 1970, max = 2100))]
    pub year: i32,
    /// Manufacturer name.
    #[validate(length(min = 1, max = 120))]
    pub manufacturer: String,
    /// Base64-encoded photo, optional.
    pub image: Option<String>,
    /// Owning line.
    pub line_id: Uuid,
}

impl CreateMachineRequest {
    /// Converts to the domain create model, decoding the image.
    pub fn into_model(self) -> Result<CreateMachine, AppError> {
        Ok(CreateMachine {
            serial: self.serial,
            model: self.model,
            machine_type: self.machine_type,
            year: self.year,
            manufacturer: self.manufacturer,
            image: decode_image(self.image)?,
            line_id: self.line_id,
        })
    }
}

/// Add-machine request for the nested line endpoint; the owning line
/// comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AddMachineRequest {
    /// Serial number, the machine's permanent identifier.
    #[validate(length(min = 1, max = 64))]
    pub serial: String,
    /// Model designation.
    #[validate(length(min = 1, max = 120))]
    pub model: String,
    /// Machine category.
    pub machine_type: MachineType,
    /// Year of manufacture.
    #[validate(range(min = 1970, max = 2100))]
    pub year: i32,
    /// Manufacturer name.
    #[validate(length(min = 1, max = 120))]
    pub manufacturer: String,
    /// Base64-encoded photo, optional.
    pub image: Option<String>,
}

impl AddMachineRequest {
    /// Converts to the domain create model under the given line.
    pub fn into_model(self, line_id: Uuid) -> Result<CreateMachine, AppError> {
        Ok(CreateMachine {
            serial: self.serial,
            model: self.model,
            machine_type: self.machine_type,
            year: self.year,
            manufacturer: self.manufacturer,
            image: decode_image(self.image)?,
            line_id,
        })
    }
}

/// Update machine request. The serial is taken from the path and is
/// immutable; omitting the image keeps the stored one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateMachineRequest {
    /// Model designation.
    #[validate(length(min = 1, max = 120))]
    pub model: String,
    /// Machine category.
    pub machine_type: MachineType,
    /// Year of manufacture.
    #[validate(range(min = 1970, max = 2100))]
    pub year: i32,
    /// Manufacturer name.
    #[validate(length(min = 1, max = 120))]
    pub manufacturer: String,
    /// Base64-encoded photo replacement, optional.
    pub image: Option<String>,
    /// Owning line; changing it moves the machine.
    pub line_id: Uuid,
}

impl UpdateMachineRequest {
    /// Converts to the domain update model, decoding the image.
    pub fn into_model(self) -> Result<UpdateMachine, AppError> {
        Ok(UpdateMachine {
            model: self.model,
            machine_type: self.machine_type,
            year: self.year,
            manufacturer: self.manufacturer,
            image: decode_image(self.image)?,
            line_id: self.line_id,
        })
    }
}

fn decode_image(encoded: Option<String>) -> Result<Option<Vec<u8>>, AppError> {
    encoded
        .map(|s| {
            BASE64
                .decode(s.as_bytes())
                .map_err(|_| AppError::validation("Image must be valid base64"))
        })
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_decoding_accepts_valid_base64() {
        let decoded = decode_image(Some("aGVsbG8=".to_string())).unwrap();
        assert_eq!(decoded, Some(b"hello".to_vec()));
    }

    #[test]
    fn image_decoding_rejects_garbage() {
        let err = decode_image(Some("!!not-base64!!".to_string())).unwrap_err();
        assert_eq!(err.kind, smthub_core::error::ErrorKind::Validation);
    }

    #[test]
    fn missing_image_stays_missing() {
        assert_eq!(decode_image(None).unwrap(), None);
    }

    #[test]
    fn blank_login_fails_validation() {
        use validator::Validate;
        let req = LoginRequest {
            username: String::new(),
            password: "x".to_string(),
        };
        assert!(req.validate().is_err());
    }
}

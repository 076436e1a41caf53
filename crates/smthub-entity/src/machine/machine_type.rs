//! Machine type enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of SMT machine on a production line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "machine_type", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum MachineType {
    /// Solder paste printer.
    Printer,
    /// Pick-and-place mounter.
    PickAndPlace,
    /// Reflow oven.
    ReflowOven,
    /// Automated optical inspection.
    Aoi,
    /// Solder paste inspection.
    Spi,
    /// Board conveyor.
    Conveyor,
}

impl MachineType {
    /// Return the machine type as a snake_case string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Printer => "printer",
            Self::PickAndPlace => "pick_and_place",
            Self::ReflowOven => "reflow_oven",
            Self::Aoi => "aoi",
            Self::Spi => "spi",
            Self::Conveyor => "conveyor",
        }
    }
}

impl fmt::Display for MachineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

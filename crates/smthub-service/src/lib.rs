//! # smthub-service
//!
//! Business logic services for SMT Hub. Orchestrates repositories and
//! auth components; enforces the hierarchy invariants (unique names,
//! the 10-children-per-parent cap, blocked vs cascade delete).

pub mod auth;
pub mod dashboard;
pub mod floor;
pub mod line;
pub mod machine;

pub use auth::{AuthService, LoginOutcome};
pub use dashboard::{DashboardService, DashboardSummary};
pub use floor::FloorService;
pub use line::LineService;
pub use machine::MachineService;

//! Machine entity — the leaf of the hierarchy, owned by a line.

pub mod machine_type;
pub mod model;

pub use machine_type::MachineType;
pub use model::{CreateMachine, Machine, MachineFilter, UpdateMachine};

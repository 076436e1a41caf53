//! Concrete repository implementations, one per entity.

pub mod floor;
pub mod line;
pub mod machine;
pub mod user;

pub use floor::FloorRepository;
pub use line::LineRepository;
pub use machine::MachineRepository;
pub use user::UserRepository;

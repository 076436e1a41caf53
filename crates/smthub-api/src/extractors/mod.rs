//! Request extractors.

pub mod auth;
pub mod body;
pub mod pagination;

pub use auth::{AuthUser, CurrentUser, RequireAdmin};
pub use body::JsonOrForm;
pub use pagination::PaginationParams;

//! Workspace-wide result alias.

use crate::error::AppError;

/// Shorthand for `Result<T, AppError>`, the return type of nearly every
/// fallible operation in the workspace.
pub type AppResult<T> = Result<T, AppError>;

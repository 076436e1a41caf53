//! Embedded migration runner.

use sqlx::PgPool;
use tracing::info;

use smthub_core::error::{AppError, ErrorKind};

/// Apply any migrations bundled into the binary that the database does
/// not have yet.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
        })?;

    info!("Database schema is up to date");
    Ok(())
}

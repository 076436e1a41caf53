//! Machine repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use smthub_core::error::{AppError, ErrorKind};
use smthub_core::result::AppResult;
use smthub_core::types::pagination::{PageRequest, PageResponse};
use smthub_entity::machine::{CreateMachine, Machine, MachineFilter, UpdateMachine};

/// Repository for machine CRUD and filtering.
#[derive(Debug, Clone)]
pub struct MachineRepository {
    pool: PgPool,
}

impl MachineRepository {
    /// Create a new machine repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a machine by serial number.
    pub async fn find_by_serial(&self, serial: &str) -> AppResult<Option<Machine>> {
        sqlx::query_as::<_, Machine>("SELECT * FROM machines WHERE serial = $1")
            .bind(serial)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find machine", e))
    }

    /// Check whether a serial number is taken.
    pub async fn exists_by_serial(&self, serial: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM machines WHERE serial = $1)")
            .bind(serial)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check machine serial", e)
            })
    }

    /// List machines with pagination and optional filters.
    pub async fn find_all(
        &self,
        filter: &MachineFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Machine>> {
        const WHERE: &str = "($1::text IS NULL OR model ILIKE '%' || $1 || '%') \
             AND ($2::machine_type IS NULL OR machine_type = $2) \
             AND ($3::integer IS NULL OR year = $3) \
             AND ($4::text IS NULL OR manufacturer ILIKE '%' || $4 || '%') \
             AND ($5::uuid IS NULL OR line_id = $5)";

        let total: i64 =
            sqlx::query_scalar(&format!("SELECT COUNT(*) FROM machines WHERE {WHERE}"))
                .bind(&filter.model)
                .bind(filter.machine_type)
                .bind(filter.year)
                .bind(&filter.manufacturer)
                .bind(filter.line_id)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to count machines", e)
                })?;

        let machines = sqlx::query_as::<_, Machine>(&format!(
            "SELECT * FROM machines WHERE {WHERE} ORDER BY serial ASC LIMIT $6 OFFSET $7"
        ))
        .bind(&filter.model)
        .bind(filter.machine_type)
        .bind(filter.year)
        .bind(&filter.manufacturer)
        .bind(filter.line_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list machines", e))?;

        Ok(PageResponse::new(
            machines,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all machines on a line.
    pub async fn find_by_line(&self, line_id: Uuid) -> AppResult<Vec<Machine>> {
        sqlx::query_as::<_, Machine>(
            "SELECT * FROM machines WHERE line_id = $1 ORDER BY serial ASC",
        )
        .bind(line_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list machines for line", e)
        })
    }

    /// Register a new machine.
    pub async fn create(&self, data: &CreateMachine) -> AppResult<Machine> {
        sqlx::query_as::<_, Machine>(
            "INSERT INTO machines (serial, model, machine_type, year, manufacturer, image, line_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) RETURNING *",
        )
        .bind(&data.serial)
        .bind(&data.model)
        .bind(data.machine_type)
        .bind(data.year)
        .bind(&data.manufacturer)
        .bind(&data.image)
        .bind(data.line_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Machine serial '{}' already exists", data.serial))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!("Line {} not found", data.line_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create machine", e),
        })
    }

    /// Update a machine. The serial is immutable; a `None` image keeps the
    /// stored photo.
    pub async fn update(&self, serial: &str, data: &UpdateMachine) -> AppResult<Machine> {
        sqlx::query_as::<_, Machine>(
            "UPDATE machines SET model = $2, machine_type = $3, year = $4, manufacturer = $5, \
             image = COALESCE($6, image), line_id = $7, updated_at = NOW() \
             WHERE serial = $1 RETURNING *",
        )
        .bind(serial)
        .bind(&data.model)
        .bind(data.machine_type)
        .bind(data.year)
        .bind(&data.manufacturer)
        .bind(&data.image)
        .bind(data.line_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!("Line {} not found", data.line_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update machine", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Machine '{serial}' not found")))
    }

    /// Delete a machine.
    pub async fn delete(&self, serial: &str) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM machines WHERE serial = $1")
            .bind(serial)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete machine", e)
            })?;
        Ok(result.rows_affected() > 0)
    }

    /// Count all machines.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM machines")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count machines", e)
            })?;
        Ok(count as u64)
    }
}

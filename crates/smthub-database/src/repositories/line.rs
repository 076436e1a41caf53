//! Line repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use smthub_core::error::{AppError, ErrorKind};
use smthub_core::result::AppResult;
use smthub_core::types::pagination::{PageRequest, PageResponse};
use smthub_entity::line::{CreateLine, Line, LineFilter, UpdateLine};

/// Repository for line CRUD, filtering, and child-count queries.
#[derive(Debug, Clone)]
pub struct LineRepository {
    pool: PgPool,
}

impl LineRepository {
    /// Create a new line repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a line by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Line>> {
        sqlx::query_as::<_, Line>("SELECT * FROM lines WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find line", e))
    }

    /// Check whether a line name is taken.
    pub async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM lines WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check line name", e)
            })
    }

    /// List lines with pagination and optional filters.
    pub async fn find_all(
        &self,
        filter: &LineFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Line>> {
        const WHERE: &str = "($1::text IS NULL OR name ILIKE '%' || $1 || '%') \
             AND ($2::lane_type IS NULL OR lane = $2) \
             AND ($3::line_direction IS NULL OR direction = $3) \
             AND ($4::uuid IS NULL OR floor_id = $4)";

        let total: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM lines WHERE {WHERE}"))
            .bind(&filter.name)
            .bind(filter.lane)
            .bind(filter.direction)
            .bind(filter.floor_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count lines", e))?;

        let lines = sqlx::query_as::<_, Line>(&format!(
            "SELECT * FROM lines WHERE {WHERE} ORDER BY name ASC LIMIT $5 OFFSET $6"
        ))
        .bind(&filter.name)
        .bind(filter.lane)
        .bind(filter.direction)
        .bind(filter.floor_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list lines", e))?;

        Ok(PageResponse::new(
            lines,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all lines on a floor.
    pub async fn find_by_floor(&self, floor_id: Uuid) -> AppResult<Vec<Line>> {
        sqlx::query_as::<_, Line>("SELECT * FROM lines WHERE floor_id = $1 ORDER BY name ASC")
            .bind(floor_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list lines for floor", e)
            })
    }

    /// Create a new line.
    pub async fn create(&self, data: &CreateLine) -> AppResult<Line> {
        sqlx::query_as::<_, Line>(
            "INSERT INTO lines (name, lane, direction, floor_id) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.lane)
        .bind(data.direction)
        .bind(data.floor_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Line name '{}' already exists", data.name))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!("Floor {} not found", data.floor_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create line", e),
        })
    }

    /// Update a line.
    pub async fn update(&self, id: Uuid, data: &UpdateLine) -> AppResult<Line> {
        sqlx::query_as::<_, Line>(
            "UPDATE lines SET name = $2, lane = $3, direction = $4, floor_id = $5, \
             updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(data.lane)
        .bind(data.direction)
        .bind(data.floor_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Line name '{}' already exists", data.name))
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!("Floor {} not found", data.floor_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update line", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Line {id} not found")))
    }

    /// Delete a line row. The FK cascade removes its machines.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM lines WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete line", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count machines on a line.
    pub async fn count_machines(&self, line_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM machines WHERE line_id = $1")
            .bind(line_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count machines", e)
            })?;
        Ok(count as u64)
    }

    /// Count all lines.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lines")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count lines", e))?;
        Ok(count as u64)
    }
}

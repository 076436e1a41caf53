//! Floor repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use smthub_core::error::{AppError, ErrorKind};
use smthub_core::result::AppResult;
use smthub_core::types::pagination::{PageRequest, PageResponse};
use smthub_entity::floor::{CreateFloor, Floor, FloorFilter};

/// Repository for floor CRUD and child-count queries.
#[derive(Debug, Clone)]
pub struct FloorRepository {
    pool: PgPool,
}

impl FloorRepository {
    /// Create a new floor repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a floor by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Floor>> {
        sqlx::query_as::<_, Floor>("SELECT * FROM floors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find floor", e))
    }

    /// Check whether a floor name is taken.
    pub async fn exists_by_name(&self, name: &str) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM floors WHERE name = $1)")
            .bind(name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check floor name", e)
            })
    }

    /// List floors with pagination and an optional name filter.
    pub async fn find_all(
        &self,
        filter: &FloorFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Floor>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM floors \
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')",
        )
        .bind(&filter.name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count floors", e))?;

        let floors = sqlx::query_as::<_, Floor>(
            "SELECT * FROM floors \
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%') \
             ORDER BY name ASC LIMIT $2 OFFSET $3",
        )
        .bind(&filter.name)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list floors", e))?;

        Ok(PageResponse::new(
            floors,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new floor.
    pub async fn create(&self, data: &CreateFloor) -> AppResult<Floor> {
        sqlx::query_as::<_, Floor>("INSERT INTO floors (name) VALUES ($1) RETURNING *")
            .bind(&data.name)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AppError::conflict(format!("Floor name '{}' already exists", data.name))
                }
                _ => AppError::with_source(ErrorKind::Database, "Failed to create floor", e),
            })
    }

    /// Rename a floor.
    pub async fn update(&self, id: Uuid, name: &str) -> AppResult<Floor> {
        sqlx::query_as::<_, Floor>(
            "UPDATE floors SET name = $2, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::conflict(format!("Floor name '{name}' already exists"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update floor", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Floor {id} not found")))
    }

    /// Delete a floor row. The FK cascade removes its lines and machines.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM floors WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete floor", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Count lines on a floor.
    pub async fn count_lines(&self, floor_id: Uuid) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM lines WHERE floor_id = $1")
            .bind(floor_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count lines", e))?;
        Ok(count as u64)
    }

    /// Count all floors.
    pub async fn count(&self) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM floors")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count floors", e))?;
        Ok(count as u64)
    }
}

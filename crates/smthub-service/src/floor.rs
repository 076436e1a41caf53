//! Floor management — the top level of the plant hierarchy.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use smthub_core::error::AppError;
use smthub_core::types::{PageRequest, PageResponse};
use smthub_database::repositories::{FloorRepository, LineRepository};
use smthub_entity::floor::{CreateFloor, Floor, FloorFilter, UpdateFloor};
use smthub_entity::line::Line;

/// CRUD operations for floors.
#[derive(Debug, Clone)]
pub struct FloorService {
    floor_repo: Arc<FloorRepository>,
    line_repo: Arc<LineRepository>,
}

impl FloorService {
    /// Creates a new floor service.
    pub fn new(floor_repo: Arc<FloorRepository>, line_repo: Arc<LineRepository>) -> Self {
        Self {
            floor_repo,
            line_repo,
        }
    }

    /// Lists floors with pagination and an optional name filter.
    pub async fn list(
        &self,
        filter: &FloorFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<Floor>, AppError> {
        self.floor_repo.find_all(filter, page).await
    }

    /// Fetches a single floor by id.
    pub async fn get(&self, id: Uuid) -> Result<Floor, AppError> {
        self.floor_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Floor not found: {id}")))
    }

    /// Lists the lines installed on a floor.
    pub async fn lines_of(&self, id: Uuid) -> Result<Vec<Line>, AppError> {
        // Surface a 404 for an unknown floor rather than an empty list.
        self.get(id).await?;
        self.line_repo.find_by_floor(id).await
    }

    /// Creates a floor. Floor names are unique across the plant.
    pub async fn create(&self, data: CreateFloor) -> Result<Floor, AppError> {
        if self.floor_repo.exists_by_name(&data.name).await? {
            return Err(AppError::conflict(format!(
                "Floor name already exists: {}",
                data.name
            )));
        }

        let floor = self.floor_repo.create(&data).await?;
        info!(floor_id = %floor.id, name = %floor.name, "Floor created");
        Ok(floor)
    }

    /// Renames a floor. The new name must not collide with another floor.
    pub async fn update(&self, id: Uuid, data: UpdateFloor) -> Result<Floor, AppError> {
        let existing = self.get(id).await?;

        if existing.name != data.name && self.floor_repo.exists_by_name(&data.name).await? {
            return Err(AppError::conflict(format!(
                "Floor name already exists: {}",
                data.name
            )));
        }

        let floor = self.floor_repo.update(id, &data.name).await?;
        info!(floor_id = %floor.id, name = %floor.name, "Floor updated");
        Ok(floor)
    }

    /// Deletes a floor, failing if any lines are still installed on it.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let floor = self.get(id).await?;

        let line_count = self.floor_repo.count_lines(id).await?;
        if line_count > 0 {
            return Err(AppError::conflict(format!(
                "Cannot delete floor '{}'. It has {line_count} line(s). \
                 Use cascade delete to remove it together with its lines.",
                floor.name
            )));
        }

        self.floor_repo.delete(id).await?;
        info!(floor_id = %id, name = %floor.name, "Floor deleted");
        Ok(())
    }

    /// Deletes a floor together with all of its lines and their machines.
    pub async fn cascade_delete(&self, id: Uuid) -> Result<(), AppError> {
        let floor = self.get(id).await?;
        let line_count = self.floor_repo.count_lines(id).await?;

        // Child rows are removed by the ON DELETE CASCADE constraints.
        self.floor_repo.delete(id).await?;
        info!(
            floor_id = %id,
            name = %floor.name,
            lines_removed = line_count,
            "Floor cascade-deleted"
        );
        Ok(())
    }
}

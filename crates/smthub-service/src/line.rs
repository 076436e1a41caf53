//! Production line management — the middle tier of the hierarchy.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use smthub_core::error::AppError;
use smthub_core::types::{PageRequest, PageResponse};
use smthub_database::repositories::{FloorRepository, LineRepository, MachineRepository};
use smthub_entity::line::{CreateLine, Line, LineFilter, UpdateLine};
use smthub_entity::machine::Machine;
use smthub_entity::MAX_CHILDREN_PER_PARENT;

/// CRUD operations for lines, including floor capacity enforcement.
#[derive(Debug, Clone)]
pub struct LineService {
    line_repo: Arc<LineRepository>,
    floor_repo: Arc<FloorRepository>,
    machine_repo: Arc<MachineRepository>,
}

impl LineService {
    /// Creates a new line service.
    pub fn new(
        line_repo: Arc<LineRepository>,
        floor_repo: Arc<FloorRepository>,
        machine_repo: Arc<MachineRepository>,
    ) -> Self {
        Self {
            line_repo,
            floor_repo,
            machine_repo,
        }
    }

    /// Lists lines with pagination and optional filters.
    pub async fn list(
        &self,
        filter: &LineFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<Line>, AppError> {
        self.line_repo.find_all(filter, page).await
    }

    /// Fetches a single line by id.
    pub async fn get(&self, id: Uuid) -> Result<Line, AppError> {
        self.line_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Line not found: {id}")))
    }

    /// Lists the machines installed on a line.
    pub async fn machines_of(&self, id: Uuid) -> Result<Vec<Machine>, AppError> {
        self.get(id).await?;
        self.machine_repo.find_by_line(id).await
    }

    /// Creates a line on a floor.
    ///
    /// Fails if the name is taken, the floor does not exist, or the floor
    /// is already at its line cap.
    pub async fn create(&self, data: CreateLine) -> Result<Line, AppError> {
        if self.line_repo.exists_by_name(&data.name).await? {
            return Err(AppError::conflict(format!(
                "Line name already exists: {}",
                data.name
            )));
        }
        self.ensure_floor_capacity(data.floor_id).await?;

        let line = self.line_repo.create(&data).await?;
        info!(
            line_id = %line.id,
            name = %line.name,
            lane = %line.lane,
            direction = %line.direction,
            floor_id = %line.floor_id,
            "Line created"
        );
        Ok(line)
    }

    /// Updates a line.
    ///
    /// Name uniqueness is only re-checked when the name changes, and the
    /// target floor's capacity only when the line moves to another floor.
    pub async fn update(&self, id: Uuid, data: UpdateLine) -> Result<Line, AppError> {
        let existing = self.get(id).await?;

        if existing.name != data.name && self.line_repo.exists_by_name(&data.name).await? {
            return Err(AppError::conflict(format!(
                "Line name already exists: {}",
                data.name
            )));
        }
        if existing.floor_id != data.floor_id {
            self.ensure_floor_capacity(data.floor_id).await?;
        }

        let line = self.line_repo.update(id, &data).await?;
        info!(line_id = %line.id, name = %line.name, "Line updated");
        Ok(line)
    }

    /// Deletes a line, failing if any machines are still installed on it.
    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        let line = self.get(id).await?;

        let machine_count = self.line_repo.count_machines(id).await?;
        if machine_count > 0 {
            return Err(AppError::conflict(format!(
                "Cannot delete line '{}'. It has {machine_count} machine(s). \
                 Use cascade delete to remove it together with its machines.",
                line.name
            )));
        }

        self.line_repo.delete(id).await?;
        info!(line_id = %id, name = %line.name, "Line deleted");
        Ok(())
    }

    /// Deletes a line together with all of its machines.
    pub async fn cascade_delete(&self, id: Uuid) -> Result<(), AppError> {
        let line = self.get(id).await?;
        let machine_count = self.line_repo.count_machines(id).await?;

        self.line_repo.delete(id).await?;
        info!(
            line_id = %id,
            name = %line.name,
            machines_removed = machine_count,
            "Line cascade-deleted"
        );
        Ok(())
    }

    /// Checks that a line exists and can accept one more machine.
    pub(crate) async fn ensure_machine_capacity(&self, line_id: Uuid) -> Result<(), AppError> {
        let line = self.get(line_id).await?;
        let machine_count = self.line_repo.count_machines(line_id).await?;
        if machine_count >= MAX_CHILDREN_PER_PARENT {
            return Err(AppError::conflict(format!(
                "Line '{}' already has {MAX_CHILDREN_PER_PARENT} machines, \
                 which is the maximum per line",
                line.name
            )));
        }
        Ok(())
    }

    async fn ensure_floor_capacity(&self, floor_id: Uuid) -> Result<(), AppError> {
        let floor = self
            .floor_repo
            .find_by_id(floor_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Floor not found: {floor_id}")))?;
        let line_count = self.floor_repo.count_lines(floor_id).await?;
        if line_count >= MAX_CHILDREN_PER_PARENT {
            return Err(AppError::conflict(format!(
                "Floor '{}' already has {MAX_CHILDREN_PER_PARENT} lines, \
                 which is the maximum per floor",
                floor.name
            )));
        }
        Ok(())
    }
}

//! Machine management — the leaves of the hierarchy.

use std::sync::Arc;

use tracing::info;

use smthub_core::error::AppError;
use smthub_core::types::{PageRequest, PageResponse};
use smthub_database::repositories::MachineRepository;
use smthub_entity::machine::{CreateMachine, Machine, MachineFilter, UpdateMachine};

use crate::line::LineService;

/// CRUD operations for machines, including line capacity enforcement.
#[derive(Debug, Clone)]
pub struct MachineService {
    machine_repo: Arc<MachineRepository>,
    line_service: Arc<LineService>,
}

impl MachineService {
    /// Creates a new machine service.
    pub fn new(machine_repo: Arc<MachineRepository>, line_service: Arc<LineService>) -> Self {
        Self {
            machine_repo,
            line_service,
        }
    }

    /// Lists machines with pagination and optional filters.
    pub async fn list(
        &self,
        filter: &MachineFilter,
        page: &PageRequest,
    ) -> Result<PageResponse<Machine>, AppError> {
        self.machine_repo.find_all(filter, page).await
    }

    /// Fetches a single machine by serial number.
    pub async fn get(&self, serial: &str) -> Result<Machine, AppError> {
        self.machine_repo
            .find_by_serial(serial)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Machine not found: {serial}")))
    }

    /// Registers a machine on a line.
    ///
    /// Fails if the serial is taken, the line does not exist, or the line
    /// is already at its machine cap.
    pub async fn create(&self, data: CreateMachine) -> Result<Machine, AppError> {
        if self.machine_repo.exists_by_serial(&data.serial).await? {
            return Err(AppError::conflict(format!(
                "Machine serial already exists: {}",
                data.serial
            )));
        }
        self.line_service.ensure_machine_capacity(data.line_id).await?;

        let machine = self.machine_repo.create(&data).await?;
        info!(
            serial = %machine.serial,
            machine_type = %machine.machine_type,
            line_id = %machine.line_id,
            "Machine created"
        );
        Ok(machine)
    }

    /// Updates a machine. The serial number is immutable.
    ///
    /// The target line's capacity is only checked when the machine moves
    /// to another line. A `None` image leaves the stored image untouched.
    pub async fn update(&self, serial: &str, data: UpdateMachine) -> Result<Machine, AppError> {
        let existing = self.get(serial).await?;

        if existing.line_id != data.line_id {
            self.line_service.ensure_machine_capacity(data.line_id).await?;
        }

        let machine = self.machine_repo.update(serial, &data).await?;
        info!(serial = %machine.serial, "Machine updated");
        Ok(machine)
    }

    /// Removes a machine. Machines have no children, so removal is direct.
    pub async fn delete(&self, serial: &str) -> Result<(), AppError> {
        let machine = self.get(serial).await?;

        self.machine_repo.delete(serial).await?;
        info!(serial = %machine.serial, "Machine deleted");
        Ok(())
    }
}

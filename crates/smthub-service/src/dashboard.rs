//! Plant-wide summary counts for the dashboard view.

use std::sync::Arc;

use serde::Serialize;

use smthub_core::error::AppError;
use smthub_database::repositories::{FloorRepository, LineRepository, MachineRepository};

/// Entity totals across the whole plant.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DashboardSummary {
    pub floors: u64,
    pub lines: u64,
    pub machines: u64,
}

/// Aggregates counts across the hierarchy.
#[derive(Debug, Clone)]
pub struct DashboardService {
    floor_repo: Arc<FloorRepository>,
    line_repo: Arc<LineRepository>,
    machine_repo: Arc<MachineRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        floor_repo: Arc<FloorRepository>,
        line_repo: Arc<LineRepository>,
        machine_repo: Arc<MachineRepository>,
    ) -> Self {
        Self {
            floor_repo,
            line_repo,
            machine_repo,
        }
    }

    /// Counts floors, lines, and machines.
    pub async fn summary(&self) -> Result<DashboardSummary, AppError> {
        let (floors, lines, machines) = tokio::try_join!(
            self.floor_repo.count(),
            self.line_repo.count(),
            self.machine_repo.count(),
        )?;

        Ok(DashboardSummary {
            floors,
            lines,
            machines,
        })
    }
}

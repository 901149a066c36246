//! Driver gateway - advance own assignments

use fleetflow_domain::engine;
use fleetflow_domain::model::Assignment;
use fleetflow_domain::repository::SnapshotRepository;
use fleetflow_domain::service;
use fleetflow_types::{AssignmentStatus, EngineError, EntityKind};

use crate::workspace::Workspace;

pub struct DriverGateway<'a, R: SnapshotRepository> {
    workspace: &'a mut Workspace<R>,
    driver_id: String,
}

impl<'a, R: SnapshotRepository> DriverGateway<'a, R> {
    pub(crate) fn new(workspace: &'a mut Workspace<R>, driver_id: String) -> Self {
        Self {
            workspace,
            driver_id,
        }
    }

    /// Mark an accepted assignment as started
    pub fn start(&mut self, assignment_id: &str) -> Result<(), EngineError> {
        self.advance(assignment_id, AssignmentStatus::Started)
    }

    /// Mark a started assignment as completed
    pub fn complete(&mut self, assignment_id: &str) -> Result<(), EngineError> {
        self.advance(assignment_id, AssignmentStatus::Completed)
    }

    fn advance(
        &mut self,
        assignment_id: &str,
        target: AssignmentStatus,
    ) -> Result<(), EngineError> {
        // Another driver's assignment does not exist from this gateway.
        let owned = self
            .workspace
            .store()
            .assignment(assignment_id)
            .is_some_and(|a| a.driver_id == self.driver_id);
        if !owned {
            return Err(EngineError::not_found(
                EntityKind::Assignment,
                assignment_id,
            ));
        }
        engine::advance_assignment(self.workspace.store_mut(), assignment_id, target)?;
        self.workspace.persist();
        Ok(())
    }

    /// The driver's own assignments
    pub fn my_assignments(&self) -> Vec<&Assignment> {
        service::assignments_for_driver(self.workspace.store(), &self.driver_id)
    }
}

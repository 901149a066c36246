//! Admin gateway - full management surface

use fleetflow_domain::engine::{self, JobDraft, JobOrigin};
use fleetflow_domain::model::{Application, Assignment, Job, User, Vehicle};
use fleetflow_domain::repository::SnapshotRepository;
use fleetflow_domain::service;
use fleetflow_types::{EngineError, Role};

use crate::workspace::Workspace;

pub struct AdminGateway<'a, R: SnapshotRepository> {
    workspace: &'a mut Workspace<R>,
}

impl<'a, R: SnapshotRepository> AdminGateway<'a, R> {
    pub(crate) fn new(workspace: &'a mut Workspace<R>) -> Self {
        Self { workspace }
    }

    /// Create a job that goes live immediately
    pub fn create_job(&mut self, draft: JobDraft) -> Result<Job, EngineError> {
        let job = engine::create_job(self.workspace.store_mut(), draft, JobOrigin::Admin)?;
        self.workspace.persist();
        Ok(job)
    }

    pub fn approve_job(&mut self, job_id: &str) -> Result<(), EngineError> {
        engine::approve_job(self.workspace.store_mut(), job_id)?;
        self.workspace.persist();
        Ok(())
    }

    pub fn deny_job(&mut self, job_id: &str) -> Result<(), EngineError> {
        engine::deny_job(self.workspace.store_mut(), job_id)?;
        self.workspace.persist();
        Ok(())
    }

    pub fn delete_job(&mut self, job_id: &str) -> Result<(), EngineError> {
        engine::delete_job(self.workspace.store_mut(), job_id)?;
        self.workspace.persist();
        Ok(())
    }

    pub fn approve_application(
        &mut self,
        application_id: &str,
        vehicle_id: &str,
    ) -> Result<Assignment, EngineError> {
        let assignment =
            engine::approve_application(self.workspace.store_mut(), application_id, vehicle_id)?;
        self.workspace.persist();
        Ok(assignment)
    }

    pub fn deny_application(&mut self, application_id: &str) -> Result<(), EngineError> {
        engine::deny_application(self.workspace.store_mut(), application_id)?;
        self.workspace.persist();
        Ok(())
    }

    pub fn register_vehicle(
        &mut self,
        number: &str,
        vehicle_type: &str,
    ) -> Result<Vehicle, EngineError> {
        let vehicle = engine::register_vehicle(self.workspace.store_mut(), number, vehicle_type)?;
        self.workspace.persist();
        Ok(vehicle)
    }

    pub fn delete_vehicle(&mut self, vehicle_id: &str) -> Result<(), EngineError> {
        engine::delete_vehicle(self.workspace.store_mut(), vehicle_id)?;
        self.workspace.persist();
        Ok(())
    }

    pub fn add_vehicle_type(&mut self, name: &str) -> Result<(), EngineError> {
        engine::add_vehicle_type(self.workspace.store_mut(), name)?;
        self.workspace.persist();
        Ok(())
    }

    pub fn remove_vehicle_type(&mut self, name: &str) -> Result<(), EngineError> {
        engine::remove_vehicle_type(self.workspace.store_mut(), name)?;
        self.workspace.persist();
        Ok(())
    }

    pub fn register_user(
        &mut self,
        name: &str,
        login: &str,
        secret: &str,
        role: Role,
    ) -> Result<User, EngineError> {
        let user = engine::register_user(self.workspace.store_mut(), name, login, secret, role)?;
        self.workspace.persist();
        Ok(user)
    }

    pub fn delete_user(&mut self, user_id: &str) -> Result<(), EngineError> {
        engine::delete_user(self.workspace.store_mut(), user_id)?;
        self.workspace.persist();
        Ok(())
    }

    /// Jobs waiting for review
    pub fn pending_jobs(&self) -> Vec<&Job> {
        service::pending_jobs(self.workspace.store())
    }

    /// All applications, newest last
    pub fn applications(&self) -> Vec<&Application> {
        self.workspace.store().applications.iter().collect()
    }

    /// Vehicles suitable for a job's requested type, loosened to the full
    /// fleet when nothing matches
    pub fn vehicles_for_job(&self, job_id: &str) -> Vec<&Vehicle> {
        service::vehicles_for_job(self.workspace.store(), job_id)
    }
}

//! Supervisor gateway - suggest jobs, apply for slots

use fleetflow_domain::engine::{self, JobDraft, JobOrigin};
use fleetflow_domain::model::{Application, Job};
use fleetflow_domain::repository::SnapshotRepository;
use fleetflow_domain::service;
use fleetflow_types::EngineError;

use crate::workspace::Workspace;

pub struct SupervisorGateway<'a, R: SnapshotRepository> {
    workspace: &'a mut Workspace<R>,
    supervisor_id: String,
}

impl<'a, R: SnapshotRepository> SupervisorGateway<'a, R> {
    pub(crate) fn new(workspace: &'a mut Workspace<R>, supervisor_id: String) -> Self {
        Self {
            workspace,
            supervisor_id,
        }
    }

    /// Suggest a job; it stays pending until an admin reviews it
    pub fn suggest_job(&mut self, draft: JobDraft) -> Result<Job, EngineError> {
        let origin = JobOrigin::Supervisor {
            creator_id: self.supervisor_id.clone(),
        };
        let job = engine::create_job(self.workspace.store_mut(), draft, origin)?;
        self.workspace.persist();
        Ok(job)
    }

    /// Apply to an open job, naming the driver for its slot
    ///
    /// One application per job per supervisor, whatever its outcome.
    pub fn apply(&mut self, job_id: &str, driver_id: &str) -> Result<Application, EngineError> {
        if service::has_applied(self.workspace.store(), &self.supervisor_id, job_id) {
            return Err(EngineError::Validation(
                "an application for this job already exists".into(),
            ));
        }
        let application = engine::apply_to_job(
            self.workspace.store_mut(),
            job_id,
            &self.supervisor_id,
            driver_id,
        )?;
        self.workspace.persist();
        Ok(application)
    }

    /// Jobs currently open for applications
    pub fn available_jobs(&self) -> Vec<&Job> {
        service::active_jobs(self.workspace.store())
    }

    /// The supervisor's own applications
    pub fn my_applications(&self) -> Vec<&Application> {
        service::applications_by_supervisor(self.workspace.store(), &self.supervisor_id)
    }

    /// The supervisor's own suggested jobs
    pub fn my_suggested_jobs(&self) -> Vec<&Job> {
        service::jobs_suggested_by(self.workspace.store(), &self.supervisor_id)
    }
}

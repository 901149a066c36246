//! Filtering and derivation helpers over the entity store

use fleetflow_types::{AssignmentStatus, JobStatus};

use crate::model::{Application, Assignment, Job, User};
use crate::store::EntityStore;

/// Jobs that are live and visible to supervisors
pub fn active_jobs(store: &EntityStore) -> Vec<&Job> {
    store
        .jobs
        .iter()
        .filter(|j| j.status == JobStatus::Approved)
        .collect()
}

/// Jobs waiting for admin review
pub fn pending_jobs(store: &EntityStore) -> Vec<&Job> {
    store
        .jobs
        .iter()
        .filter(|j| j.status == JobStatus::Pending)
        .collect()
}

/// Jobs a supervisor suggested
pub fn jobs_suggested_by<'a>(store: &'a EntityStore, supervisor_id: &str) -> Vec<&'a Job> {
    store
        .jobs
        .iter()
        .filter(|j| j.creator_id.as_deref() == Some(supervisor_id))
        .collect()
}

/// All applications a supervisor has submitted
pub fn applications_by_supervisor<'a>(
    store: &'a EntityStore,
    supervisor_id: &str,
) -> Vec<&'a Application> {
    store
        .applications
        .iter()
        .filter(|a| a.supervisor_id == supervisor_id)
        .collect()
}

/// Whether a supervisor already has any application against a job
///
/// Denied applications count too: one application per supervisor per job,
/// whatever its outcome.
pub fn has_applied(store: &EntityStore, supervisor_id: &str, job_id: &str) -> bool {
    store
        .applications
        .iter()
        .any(|a| a.supervisor_id == supervisor_id && a.job_id == job_id)
}

/// Assignments belonging to one driver
pub fn assignments_for_driver<'a>(
    store: &'a EntityStore,
    driver_id: &str,
) -> Vec<&'a Assignment> {
    store
        .assignments
        .iter()
        .filter(|a| a.driver_id == driver_id)
        .collect()
}

/// The assignment a job's approval produced, if any
pub fn assignment_for_job<'a>(store: &'a EntityStore, job_id: &str) -> Option<&'a Assignment> {
    store.assignments.iter().find(|a| a.job_id == job_id)
}

/// A job counts as completed once its assignment has been driven to the end
pub fn job_completed(store: &EntityStore, job_id: &str) -> bool {
    assignment_for_job(store, job_id)
        .map(|a| a.status == AssignmentStatus::Completed)
        .unwrap_or(false)
}

/// All users with the driver role
pub fn drivers(store: &EntityStore) -> Vec<&User> {
    store.users.iter().filter(|u| u.is_driver()).collect()
}

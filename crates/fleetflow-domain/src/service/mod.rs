//! Domain services - pure queries over the entity store

pub mod matching;
pub mod queries;

pub use matching::vehicles_for_job;
pub use queries::{
    active_jobs, applications_by_supervisor, assignment_for_job, assignments_for_driver,
    drivers, has_applied, job_completed, jobs_suggested_by, pending_jobs,
};

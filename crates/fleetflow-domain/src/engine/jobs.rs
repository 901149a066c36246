//! Job lifecycle operations

use chrono::{NaiveDate, NaiveTime};

use fleetflow_types::{EngineError, EntityKind, JobStatus};

use crate::model::{id, Job};
use crate::store::EntityStore;

/// Input fields for a new job
#[derive(Debug, Clone)]
pub struct JobDraft {
    pub route_from: String,
    pub route_to: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub slot_count: u32,
    pub requested_vehicle_type: Option<String>,
}

/// Who is creating a job, which decides its initial status
#[derive(Debug, Clone)]
pub enum JobOrigin {
    /// Admin jobs go live immediately
    Admin,
    /// Supervisor jobs wait for admin approval
    Supervisor { creator_id: String },
}

/// Create a job from a draft
///
/// Admin origin yields an `approved` job; supervisor origin yields a
/// `pending` one carrying the creator id. `available_slots` starts at
/// `slot_count`. A supervisor must name the vehicle type the job needs;
/// for admins it is optional.
pub fn create_job(
    store: &mut EntityStore,
    draft: JobDraft,
    origin: JobOrigin,
) -> Result<Job, EngineError> {
    let route_from = draft.route_from.trim().to_string();
    let route_to = draft.route_to.trim().to_string();
    if route_from.is_empty() || route_to.is_empty() {
        return Err(EngineError::Validation(
            "both route endpoints are required".into(),
        ));
    }
    if draft.slot_count < 1 {
        return Err(EngineError::Validation(
            "a job needs at least one slot".into(),
        ));
    }

    let requested_vehicle_type = draft
        .requested_vehicle_type
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty());

    let (status, creator_id) = match origin {
        JobOrigin::Admin => (JobStatus::Approved, None),
        JobOrigin::Supervisor { creator_id } => {
            if requested_vehicle_type.is_none() {
                return Err(EngineError::Validation(
                    "a suggested job must name the required vehicle type".into(),
                ));
            }
            (JobStatus::Pending, Some(creator_id))
        }
    };

    let job = Job {
        id: id::fresh(id::JOB_PREFIX),
        route_from,
        route_to,
        date: draft.date,
        time: draft.time,
        slot_count: draft.slot_count,
        available_slots: draft.slot_count,
        status,
        creator_id,
        requested_vehicle_type,
    };
    store.jobs.push(job.clone());
    Ok(job)
}

/// Approve a pending job, putting it live
pub fn approve_job(store: &mut EntityStore, job_id: &str) -> Result<(), EngineError> {
    let job = store
        .job_mut(job_id)
        .filter(|j| j.status == JobStatus::Pending)
        .ok_or_else(|| EngineError::not_found(EntityKind::Job, job_id))?;
    job.status = JobStatus::Approved;
    Ok(())
}

/// Deny a pending job
///
/// Denied jobs are not retained: the job is removed from the store outright.
pub fn deny_job(store: &mut EntityStore, job_id: &str) -> Result<(), EngineError> {
    let exists = store
        .job(job_id)
        .is_some_and(|j| j.status == JobStatus::Pending);
    if !exists {
        return Err(EngineError::not_found(EntityKind::Job, job_id));
    }
    store.jobs.retain(|j| j.id != job_id);
    Ok(())
}

/// Delete a job, cascading to its applications and assignments
///
/// The store never holds an application or assignment pointing at a job
/// that is gone.
pub fn delete_job(store: &mut EntityStore, job_id: &str) -> Result<(), EngineError> {
    if store.job(job_id).is_none() {
        return Err(EngineError::not_found(EntityKind::Job, job_id));
    }
    store.jobs.retain(|j| j.id != job_id);
    store.applications.retain(|a| a.job_id != job_id);
    store.assignments.retain(|a| a.job_id != job_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Application, Assignment};
    use fleetflow_types::{ApplicationStatus, AssignmentStatus};

    fn draft() -> JobDraft {
        JobDraft {
            route_from: "Depot".to_string(),
            route_to: "Harbor".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            slot_count: 2,
            requested_vehicle_type: Some("Truck".to_string()),
        }
    }

    fn supervisor_origin() -> JobOrigin {
        JobOrigin::Supervisor {
            creator_id: "sup-1".to_string(),
        }
    }

    #[test]
    fn test_admin_job_goes_live_immediately() {
        let mut store = EntityStore::default();
        let job = create_job(&mut store, draft(), JobOrigin::Admin).unwrap();
        assert_eq!(job.status, JobStatus::Approved);
        assert_eq!(job.available_slots, 2);
        assert_eq!(job.slot_count, 2);
        assert!(job.id.starts_with("job-"));
        assert!(job.creator_id.is_none());
        assert_eq!(store.jobs.len(), 1);
    }

    #[test]
    fn test_supervisor_job_waits_for_approval() {
        let mut store = EntityStore::default();
        let job = create_job(&mut store, draft(), supervisor_origin()).unwrap();
        assert_eq!(job.status, JobStatus::Pending);
        assert_eq!(job.creator_id.as_deref(), Some("sup-1"));
    }

    #[test]
    fn test_supervisor_job_requires_vehicle_type() {
        let mut store = EntityStore::default();
        let mut d = draft();
        d.requested_vehicle_type = None;
        let err = create_job(&mut store, d, supervisor_origin()).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
        assert!(store.jobs.is_empty());
    }

    #[test]
    fn test_create_rejects_zero_slots() {
        let mut store = EntityStore::default();
        let mut d = draft();
        d.slot_count = 0;
        let err = create_job(&mut store, d, JobOrigin::Admin).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_create_rejects_blank_route() {
        let mut store = EntityStore::default();
        let mut d = draft();
        d.route_to = "   ".to_string();
        let err = create_job(&mut store, d, JobOrigin::Admin).unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
    }

    #[test]
    fn test_blank_vehicle_type_stored_as_none() {
        let mut store = EntityStore::default();
        let mut d = draft();
        d.requested_vehicle_type = Some("  ".to_string());
        let job = create_job(&mut store, d, JobOrigin::Admin).unwrap();
        assert!(job.requested_vehicle_type.is_none());
    }

    #[test]
    fn test_approve_pending_job() {
        let mut store = EntityStore::default();
        let job = create_job(&mut store, draft(), supervisor_origin()).unwrap();
        approve_job(&mut store, &job.id).unwrap();
        assert_eq!(store.job(&job.id).unwrap().status, JobStatus::Approved);
    }

    #[test]
    fn test_approve_unknown_job() {
        let mut store = EntityStore::default();
        let err = approve_job(&mut store, "job-missing").unwrap_err();
        assert!(matches!(err, EngineError::NotFound { .. }));
    }

    #[test]
    fn test_approve_requires_pending_status() {
        let mut store = EntityStore::default();
        let job = create_job(&mut store, draft(), JobOrigin::Admin).unwrap();
        let err = approve_job(&mut store, &job.id).unwrap_err();
        assert!(matches!(err, EngineError::NotFound { .. }));
    }

    #[test]
    fn test_deny_removes_job_entirely() {
        let mut store = EntityStore::default();
        let job = create_job(&mut store, draft(), supervisor_origin()).unwrap();
        deny_job(&mut store, &job.id).unwrap();
        assert!(store.job(&job.id).is_none());
        assert!(store.jobs.is_empty());
    }

    #[test]
    fn test_deny_requires_pending_status() {
        let mut store = EntityStore::default();
        let job = create_job(&mut store, draft(), JobOrigin::Admin).unwrap();
        let err = deny_job(&mut store, &job.id).unwrap_err();
        assert!(matches!(err, EngineError::NotFound { .. }));
        assert_eq!(store.jobs.len(), 1);
    }

    #[test]
    fn test_delete_cascades_to_applications_and_assignments() {
        let mut store = EntityStore::default();
        let doomed = create_job(&mut store, draft(), JobOrigin::Admin).unwrap();
        let kept = create_job(&mut store, draft(), JobOrigin::Admin).unwrap();
        for job_id in [&doomed.id, &kept.id] {
            store.applications.push(Application {
                id: id::fresh(id::APPLICATION_PREFIX),
                job_id: job_id.clone(),
                supervisor_id: "sup-1".to_string(),
                status: ApplicationStatus::Approved,
                requested_driver_id: Some("driver-1".to_string()),
            });
            store.assignments.push(Assignment {
                id: id::fresh(id::ASSIGNMENT_PREFIX),
                job_id: job_id.clone(),
                supervisor_id: "sup-1".to_string(),
                driver_id: "driver-1".to_string(),
                vehicle_id: "veh-1".to_string(),
                status: AssignmentStatus::Accepted,
            });
        }

        delete_job(&mut store, &doomed.id).unwrap();

        assert!(store.job(&doomed.id).is_none());
        assert!(store.applications.iter().all(|a| a.job_id == kept.id));
        assert!(store.assignments.iter().all(|a| a.job_id == kept.id));
        assert_eq!(store.applications.len(), 1);
        assert_eq!(store.assignments.len(), 1);
    }

    #[test]
    fn test_delete_unknown_job() {
        let mut store = EntityStore::default();
        let err = delete_job(&mut store, "job-missing").unwrap_err();
        assert!(matches!(err, EngineError::NotFound { .. }));
    }
}

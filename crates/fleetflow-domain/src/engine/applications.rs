//! Application lifecycle operations

use fleetflow_types::{ApplicationStatus, AssignmentStatus, EngineError, EntityKind};

use crate::model::{id, Application, Assignment};
use crate::store::EntityStore;

/// Submit an application against an approved job with open capacity
///
/// The caller names the driver explicitly; a blank driver id is rejected.
/// Duplicate applications from the same supervisor are a gateway concern,
/// not enforced here.
pub fn apply_to_job(
    store: &mut EntityStore,
    job_id: &str,
    supervisor_id: &str,
    requested_driver_id: &str,
) -> Result<Application, EngineError> {
    let requested_driver_id = requested_driver_id.trim();
    if requested_driver_id.is_empty() {
        return Err(EngineError::Validation("a driver must be selected".into()));
    }
    let job = store
        .job(job_id)
        .ok_or_else(|| EngineError::not_found(EntityKind::Job, job_id))?;
    if !job.is_approved() || !job.has_open_slots() {
        return Err(EngineError::Capacity(job_id.to_string()));
    }

    let application = Application {
        id: id::fresh(id::APPLICATION_PREFIX),
        job_id: job_id.to_string(),
        supervisor_id: supervisor_id.to_string(),
        status: ApplicationStatus::Pending,
        requested_driver_id: Some(requested_driver_id.to_string()),
    };
    store.applications.push(application.clone());
    Ok(application)
}

/// Approve a pending application, binding driver and vehicle into an assignment
///
/// The job's `available_slots` is set to zero, not decremented: the first
/// approval closes the whole job (single-assignment-per-job policy). When the
/// application names no driver (legacy snapshots only), the first driver in
/// the user set is taken instead.
pub fn approve_application(
    store: &mut EntityStore,
    application_id: &str,
    vehicle_id: &str,
) -> Result<Assignment, EngineError> {
    let application = store
        .application(application_id)
        .filter(|a| a.is_pending())
        .ok_or_else(|| EngineError::not_found(EntityKind::Application, application_id))?;
    let job_id = application.job_id.clone();
    let supervisor_id = application.supervisor_id.clone();
    let requested_driver_id = application.requested_driver_id.clone();

    if store.job(&job_id).is_none() {
        return Err(EngineError::not_found(EntityKind::Job, &job_id));
    }

    let vehicle_id = vehicle_id.trim();
    if vehicle_id.is_empty() {
        return Err(EngineError::Validation("a vehicle must be selected".into()));
    }
    if store.vehicle(vehicle_id).is_none() {
        return Err(EngineError::Validation(format!(
            "no such vehicle: {vehicle_id}"
        )));
    }

    let driver_id = match requested_driver_id.filter(|d| !d.is_empty()) {
        Some(driver_id) => driver_id,
        None => store
            .users
            .iter()
            .find(|u| u.is_driver())
            .map(|u| u.id.clone())
            .ok_or_else(|| EngineError::Validation("no driver available to assign".into()))?,
    };

    let assignment = Assignment {
        id: id::fresh(id::ASSIGNMENT_PREFIX),
        job_id: job_id.clone(),
        supervisor_id,
        driver_id,
        vehicle_id: vehicle_id.to_string(),
        status: AssignmentStatus::Accepted,
    };

    // All checks passed; apply the full mutation in one go.
    if let Some(application) = store.application_mut(application_id) {
        application.status = ApplicationStatus::Approved;
    }
    if let Some(job) = store.job_mut(&job_id) {
        job.available_slots = 0;
    }
    store.assignments.push(assignment.clone());
    Ok(assignment)
}

/// Deny a pending application; terminal, job slots are untouched
pub fn deny_application(
    store: &mut EntityStore,
    application_id: &str,
) -> Result<(), EngineError> {
    let application = store
        .application_mut(application_id)
        .filter(|a| a.is_pending())
        .ok_or_else(|| EngineError::not_found(EntityKind::Application, application_id))?;
    application.status = ApplicationStatus::Denied;
    Ok(())
}

//! Vehicle matching for application approval

use crate::model::Vehicle;
use crate::store::EntityStore;

/// Vehicles suitable for a job's requested type
///
/// Filters by exact type match. When the job names no type, or nothing
/// matches, the full vehicle set is offered instead: capacity over
/// strictness, the admin can still pick anything.
pub fn vehicles_for_job<'a>(store: &'a EntityStore, job_id: &str) -> Vec<&'a Vehicle> {
    let requested = store
        .job(job_id)
        .and_then(|j| j.requested_vehicle_type.as_deref());

    if let Some(wanted) = requested {
        let matched: Vec<&Vehicle> = store
            .vehicles
            .iter()
            .filter(|v| v.vehicle_type == wanted)
            .collect();
        if !matched.is_empty() {
            return matched;
        }
    }
    store.vehicles.iter().collect()
}

//! Assignment lifecycle operations

use fleetflow_types::{AssignmentStatus, EngineError, EntityKind};

use crate::store::EntityStore;

/// Advance an assignment one step along accepted -> started -> completed
///
/// Exactly two transitions exist; anything else (skip, regression, repeat)
/// is rejected. Deliberately not idempotent: asking for a transition from a
/// state the assignment no longer occupies fails instead of silently
/// succeeding.
pub fn advance_assignment(
    store: &mut EntityStore,
    assignment_id: &str,
    target: AssignmentStatus,
) -> Result<(), EngineError> {
    let assignment = store
        .assignment_mut(assignment_id)
        .ok_or_else(|| EngineError::not_found(EntityKind::Assignment, assignment_id))?;

    match (assignment.status, target) {
        (AssignmentStatus::Accepted, AssignmentStatus::Started)
        | (AssignmentStatus::Started, AssignmentStatus::Completed) => {
            assignment.status = target;
            Ok(())
        }
        (from, to) => Err(EngineError::InvalidTransition { from, to }),
    }
}

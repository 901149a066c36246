//! Assignment type definitions

use serde::{Deserialize, Serialize};

use fleetflow_types::AssignmentStatus;

/// The concrete driver+vehicle binding created when an application is approved
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: String,
    pub job_id: String,
    pub supervisor_id: String,
    pub driver_id: String,
    pub vehicle_id: String,
    pub status: AssignmentStatus,
}

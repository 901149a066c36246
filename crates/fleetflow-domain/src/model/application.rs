//! Application type definitions

use serde::{Deserialize, Serialize};

use fleetflow_types::ApplicationStatus;

/// A supervisor's request to fill a job's slot with a specific driver
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub job_id: String,
    pub supervisor_id: String,
    pub status: ApplicationStatus,
    /// Absent only in legacy snapshots; new applications always name a driver
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_driver_id: Option<String>,
}

impl Application {
    pub fn is_pending(&self) -> bool {
        self.status == ApplicationStatus::Pending
    }
}

//! Transport job type definitions

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use fleetflow_types::JobStatus;

/// A transport task with a route, schedule, and slot capacity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: String,
    pub route_from: String,
    pub route_to: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub slot_count: u32,
    pub available_slots: u32,
    /// Jobs persisted before the status field existed were live, approved jobs
    #[serde(default = "default_status")]
    pub status: JobStatus,
    /// Set when a supervisor suggested the job
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creator_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requested_vehicle_type: Option<String>,
}

fn default_status() -> JobStatus {
    JobStatus::Approved
}

impl Job {
    pub fn is_approved(&self) -> bool {
        self.status == JobStatus::Approved
    }

    pub fn has_open_slots(&self) -> bool {
        self.available_slots > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_status_deserializes_as_approved() {
        let raw = r#"{
            "id": "job-legacy",
            "route_from": "Depot",
            "route_to": "Harbor",
            "date": "2024-03-01",
            "time": "08:00:00",
            "slot_count": 2,
            "available_slots": 2
        }"#;
        let job: Job = serde_json::from_str(raw).unwrap();
        assert_eq!(job.status, JobStatus::Approved);
        assert!(job.creator_id.is_none());
    }

    #[test]
    fn test_explicit_status_survives_round_trip() {
        let raw = r#"{
            "id": "job-1",
            "route_from": "Depot",
            "route_to": "Harbor",
            "date": "2024-03-01",
            "time": "08:00:00",
            "slot_count": 1,
            "available_slots": 1,
            "status": "pending",
            "creator_id": "sup-1"
        }"#;
        let job: Job = serde_json::from_str(raw).unwrap();
        assert_eq!(job.status, JobStatus::Pending);
        let back = serde_json::to_string(&job).unwrap();
        let again: Job = serde_json::from_str(&back).unwrap();
        assert_eq!(again.status, JobStatus::Pending);
        assert_eq!(again.creator_id.as_deref(), Some("sup-1"));
    }
}

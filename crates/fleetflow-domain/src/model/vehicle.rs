//! Vehicle type definitions

use serde::{Deserialize, Serialize};

/// A registered vehicle
///
/// The `vehicle_type` is a member of the configured type set at registration
/// time; removing a type later does not touch vehicles already using it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub number: String,
    #[serde(rename = "type")]
    pub vehicle_type: String,
}

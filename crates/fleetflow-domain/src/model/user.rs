//! User account type definitions

use serde::{Deserialize, Serialize};

use fleetflow_types::Role;

/// A registered account with one of the three actor roles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Login handle, matched alongside the id at authentication time
    pub login: String,
    pub secret: String,
    pub role: Role,
}

impl User {
    pub fn is_driver(&self) -> bool {
        self.role == Role::Driver
    }
}

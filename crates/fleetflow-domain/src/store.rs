//! The entity store, single source of truth for all collections
//!
//! One owned value holding the five entity collections plus the configured
//! vehicle-type set. Lifecycle engine operations take it by mutable
//! reference; persistence serializes it wholesale. Lookups return `Option`
//! so dangling references (a deleted user still named by an assignment)
//! surface as absence instead of panics.

use serde::{Deserialize, Serialize};

use crate::model::{Application, Assignment, Job, User, Vehicle};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityStore {
    pub users: Vec<User>,
    pub jobs: Vec<Job>,
    pub vehicles: Vec<Vehicle>,
    pub applications: Vec<Application>,
    pub assignments: Vec<Assignment>,
    pub vehicle_types: Vec<String>,
}

impl EntityStore {
    pub fn user(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|j| j.id == id)
    }

    pub fn job_mut(&mut self, id: &str) -> Option<&mut Job> {
        self.jobs.iter_mut().find(|j| j.id == id)
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn application(&self, id: &str) -> Option<&Application> {
        self.applications.iter().find(|a| a.id == id)
    }

    pub fn application_mut(&mut self, id: &str) -> Option<&mut Application> {
        self.applications.iter_mut().find(|a| a.id == id)
    }

    pub fn assignment(&self, id: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.id == id)
    }

    pub fn assignment_mut(&mut self, id: &str) -> Option<&mut Assignment> {
        self.assignments.iter_mut().find(|a| a.id == id)
    }

    pub fn has_vehicle_type(&self, name: &str) -> bool {
        self.vehicle_types.iter().any(|t| t == name)
    }
}

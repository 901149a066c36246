//! Shared enums for roles and entity lifecycles

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Actor role within the system
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Supervisor,
    Driver,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Supervisor => write!(f, "supervisor"),
            Role::Driver => write!(f, "driver"),
        }
    }
}

/// Review state of a job
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Approved,
    Denied,
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            JobStatus::Pending => write!(f, "pending"),
            JobStatus::Approved => write!(f, "approved"),
            JobStatus::Denied => write!(f, "denied"),
        }
    }
}

/// Review state of an application
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Denied,
}

impl std::fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApplicationStatus::Pending => write!(f, "pending"),
            ApplicationStatus::Approved => write!(f, "approved"),
            ApplicationStatus::Denied => write!(f, "denied"),
        }
    }
}

/// Execution progress of an assignment, strictly forward
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssignmentStatus {
    Accepted,
    Started,
    Completed,
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Accepted => write!(f, "accepted"),
            AssignmentStatus::Started => write!(f, "started"),
            AssignmentStatus::Completed => write!(f, "completed"),
        }
    }
}

/// Entity family, used in not-found reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Job,
    Vehicle,
    Application,
    Assignment,
    VehicleType,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::User => write!(f, "user"),
            EntityKind::Job => write!(f, "job"),
            EntityKind::Vehicle => write!(f, "vehicle"),
            EntityKind::Application => write!(f, "application"),
            EntityKind::Assignment => write!(f, "assignment"),
            EntityKind::VehicleType => write!(f, "vehicle type"),
        }
    }
}

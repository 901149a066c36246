//! CLI definitions

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use fleetflow_types::{OutputFormat, Role};

#[derive(Parser)]
#[command(
    name = "fleetflow",
    version,
    about = "Coordinate transport jobs among admins, supervisors, and drivers"
)]
pub struct Cli {
    /// Login identifier (handle or user id)
    #[arg(long)]
    pub user: Option<String>,

    /// Login secret
    #[arg(long)]
    pub secret: Option<String>,

    /// Override the snapshot directory
    #[arg(long, global = true)]
    pub store_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage transport jobs
    Job {
        #[command(subcommand)]
        command: JobCommand,
    },
    /// Apply to an open job, naming a driver (supervisor)
    Apply {
        job_id: String,
        /// Driver to fill the slot
        #[arg(long)]
        driver: String,
    },
    /// Review applications (admin)
    Application {
        #[command(subcommand)]
        command: ApplicationCommand,
    },
    /// Track assignment progress (driver)
    Assignment {
        #[command(subcommand)]
        command: AssignmentCommand,
    },
    /// Manage the vehicle fleet (admin)
    Vehicle {
        #[command(subcommand)]
        command: VehicleCommand,
    },
    /// Manage the configured vehicle-type set (admin)
    VehicleType {
        #[command(subcommand)]
        command: VehicleTypeCommand,
    },
    /// Manage accounts (admin)
    User {
        #[command(subcommand)]
        command: UserCommand,
    },
}

#[derive(Subcommand)]
pub enum JobCommand {
    /// Create a job; admins put it live, supervisors suggest it for approval
    Add {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
        /// Date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Time, HH:MM
        #[arg(long)]
        time: String,
        #[arg(long, default_value_t = 1)]
        slots: u32,
        #[arg(long)]
        vehicle_type: Option<String>,
    },
    /// Approve a pending job (admin)
    Approve { job_id: String },
    /// Deny a pending job, removing it (admin)
    Deny { job_id: String },
    /// Delete a job and everything referencing it (admin)
    Delete { job_id: String },
    /// List jobs
    List {
        /// Only jobs waiting for approval
        #[arg(long)]
        pending: bool,
    },
}

#[derive(Subcommand)]
pub enum ApplicationCommand {
    /// Approve an application, binding a vehicle (admin)
    Approve {
        application_id: String,
        /// Vehicle to assign
        #[arg(long)]
        vehicle: String,
    },
    /// Deny an application (admin)
    Deny { application_id: String },
    /// List applications; supervisors see their own
    List,
}

#[derive(Subcommand)]
pub enum AssignmentCommand {
    /// Mark an accepted assignment as started (driver)
    Start { assignment_id: String },
    /// Mark a started assignment as completed (driver)
    Complete { assignment_id: String },
    /// List assignments; drivers see their own
    List,
}

#[derive(Subcommand)]
pub enum VehicleCommand {
    /// Register a vehicle under a configured type
    Add {
        #[arg(long)]
        number: String,
        #[arg(long)]
        vehicle_type: String,
    },
    /// Remove a vehicle
    Remove { vehicle_id: String },
    /// List vehicles
    List {
        /// Restrict to vehicles suitable for a job
        #[arg(long)]
        job: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum VehicleTypeCommand {
    /// Add a vehicle type
    Add { name: String },
    /// Remove a vehicle type; existing vehicles keep it
    Remove { name: String },
    /// List the configured types
    List,
}

#[derive(Subcommand)]
pub enum UserCommand {
    /// Register a supervisor or driver account
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        login: String,
        #[arg(long)]
        secret: String,
        #[arg(long, value_enum)]
        role: Role,
    },
    /// Remove an account; the root admin is protected
    Remove { user_id: String },
    /// List accounts; supervisors see the driver pool
    List,
}

//! Command handlers

use chrono::{NaiveDate, NaiveTime};

use fleetflow_app::config::Config;
use fleetflow_app::repository::{open_snapshot_repo, open_snapshot_repo_at};
use fleetflow_app::{session, Workspace};
use fleetflow_domain::engine::JobDraft;
use fleetflow_domain::model::User;
use fleetflow_domain::service;
use fleetflow_infra::FileSnapshotRepository;
use fleetflow_types::{AuthError, EngineError, OutputFormat, Result, Role};

use crate::cli::{
    ApplicationCommand, AssignmentCommand, Cli, Commands, JobCommand, UserCommand,
    VehicleCommand, VehicleTypeCommand,
};
use crate::output;

type Ws = Workspace<FileSnapshotRepository>;

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    // Load config; the CLI flag overrides the configured store location.
    let config = Config::load()?;
    let repo = match &cli.store_dir {
        Some(dir) => open_snapshot_repo_at(dir.clone())?,
        None => open_snapshot_repo(&config)?,
    };
    let mut workspace = Workspace::open(repo)?;

    let user = current_user(&workspace, &cli)?;
    let format = cli.format;

    match cli.command {
        Commands::Job { command } => job_command(&mut workspace, &user, command, format)?,
        Commands::Apply { job_id, driver } => {
            let application = workspace.supervisor(&user)?.apply(&job_id, &driver)?;
            println!("Submitted application {}", application.id);
        }
        Commands::Application { command } => {
            application_command(&mut workspace, &user, command, format)?
        }
        Commands::Assignment { command } => {
            assignment_command(&mut workspace, &user, command, format)?
        }
        Commands::Vehicle { command } => vehicle_command(&mut workspace, &user, command, format)?,
        Commands::VehicleType { command } => {
            vehicle_type_command(&mut workspace, &user, command, format)?
        }
        Commands::User { command } => user_command(&mut workspace, &user, command, format)?,
    }

    report_sync(&mut workspace);
    Ok(())
}

fn current_user(workspace: &Ws, cli: &Cli) -> Result<User> {
    let (Some(identifier), Some(secret)) = (&cli.user, &cli.secret) else {
        return Err(AuthError::MissingCredentials.into());
    };
    Ok(session::authenticate(workspace.store(), identifier, secret)?.clone())
}

/// Persistence is best-effort: surface a failed write as a warning
fn report_sync(workspace: &mut Ws) {
    if let Some(e) = workspace.take_sync_error() {
        eprintln!("Warning: state advanced but could not be saved: {}", e);
    }
}

fn job_command(
    workspace: &mut Ws,
    user: &User,
    command: JobCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        JobCommand::Add {
            from,
            to,
            date,
            time,
            slots,
            vehicle_type,
        } => {
            let draft = JobDraft {
                route_from: from,
                route_to: to,
                date: parse_date(&date)?,
                time: parse_time(&time)?,
                slot_count: slots,
                requested_vehicle_type: vehicle_type,
            };
            let job = match user.role {
                Role::Admin => workspace.admin(user)?.create_job(draft)?,
                Role::Supervisor => workspace.supervisor(user)?.suggest_job(draft)?,
                Role::Driver => return Err(AuthError::Forbidden(Role::Supervisor).into()),
            };
            println!("Created job {} ({})", job.id, job.status);
        }
        JobCommand::Approve { job_id } => {
            workspace.admin(user)?.approve_job(&job_id)?;
            println!("Approved job {}", job_id);
        }
        JobCommand::Deny { job_id } => {
            workspace.admin(user)?.deny_job(&job_id)?;
            println!("Denied and removed job {}", job_id);
        }
        JobCommand::Delete { job_id } => {
            workspace.admin(user)?.delete_job(&job_id)?;
            println!("Deleted job {} and everything referencing it", job_id);
        }
        JobCommand::List { pending } => {
            let store = workspace.store();
            let jobs = if pending {
                service::pending_jobs(store)
            } else {
                service::active_jobs(store)
            };
            output::print_jobs(format, store, &jobs)?;
        }
    }
    Ok(())
}

fn application_command(
    workspace: &mut Ws,
    user: &User,
    command: ApplicationCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        ApplicationCommand::Approve {
            application_id,
            vehicle,
        } => {
            let assignment = workspace
                .admin(user)?
                .approve_application(&application_id, &vehicle)?;
            println!(
                "Approved application {}; assignment {} created",
                application_id, assignment.id
            );
        }
        ApplicationCommand::Deny { application_id } => {
            workspace.admin(user)?.deny_application(&application_id)?;
            println!("Denied application {}", application_id);
        }
        ApplicationCommand::List => {
            let store = workspace.store();
            let applications = match user.role {
                Role::Admin => store.applications.iter().collect(),
                Role::Supervisor => service::applications_by_supervisor(store, &user.id),
                Role::Driver => return Err(AuthError::Forbidden(Role::Admin).into()),
            };
            output::print_applications(format, store, &applications)?;
        }
    }
    Ok(())
}

fn assignment_command(
    workspace: &mut Ws,
    user: &User,
    command: AssignmentCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        AssignmentCommand::Start { assignment_id } => {
            workspace.driver(user)?.start(&assignment_id)?;
            println!("Started assignment {}", assignment_id);
        }
        AssignmentCommand::Complete { assignment_id } => {
            workspace.driver(user)?.complete(&assignment_id)?;
            println!("Completed assignment {}", assignment_id);
        }
        AssignmentCommand::List => {
            let store = workspace.store();
            let assignments = match user.role {
                Role::Admin => store.assignments.iter().collect(),
                Role::Supervisor => store
                    .assignments
                    .iter()
                    .filter(|a| a.supervisor_id == user.id)
                    .collect(),
                Role::Driver => service::assignments_for_driver(store, &user.id),
            };
            output::print_assignments(format, store, &assignments)?;
        }
    }
    Ok(())
}

fn vehicle_command(
    workspace: &mut Ws,
    user: &User,
    command: VehicleCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        VehicleCommand::Add {
            number,
            vehicle_type,
        } => {
            let vehicle = workspace
                .admin(user)?
                .register_vehicle(&number, &vehicle_type)?;
            println!("Registered vehicle {}", vehicle.id);
        }
        VehicleCommand::Remove { vehicle_id } => {
            workspace.admin(user)?.delete_vehicle(&vehicle_id)?;
            println!("Removed vehicle {}", vehicle_id);
        }
        VehicleCommand::List { job } => {
            let store = workspace.store();
            let vehicles = match job {
                Some(job_id) => service::vehicles_for_job(store, &job_id),
                None => store.vehicles.iter().collect(),
            };
            output::print_vehicles(format, &vehicles)?;
        }
    }
    Ok(())
}

fn vehicle_type_command(
    workspace: &mut Ws,
    user: &User,
    command: VehicleTypeCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        VehicleTypeCommand::Add { name } => {
            workspace.admin(user)?.add_vehicle_type(&name)?;
            println!("Vehicle type set now includes {}", name.trim());
        }
        VehicleTypeCommand::Remove { name } => {
            workspace.admin(user)?.remove_vehicle_type(&name)?;
            println!("Removed vehicle type {}", name);
        }
        VehicleTypeCommand::List => {
            output::print_vehicle_types(format, &workspace.store().vehicle_types)?;
        }
    }
    Ok(())
}

fn user_command(
    workspace: &mut Ws,
    user: &User,
    command: UserCommand,
    format: OutputFormat,
) -> Result<()> {
    match command {
        UserCommand::Add {
            name,
            login,
            secret,
            role,
        } => {
            let created = workspace
                .admin(user)?
                .register_user(&name, &login, &secret, role)?;
            println!("Registered {} {}", created.role, created.id);
        }
        UserCommand::Remove { user_id } => {
            workspace.admin(user)?.delete_user(&user_id)?;
            println!("Removed user {}", user_id);
        }
        UserCommand::List => {
            let store = workspace.store();
            // Supervisors see the driver pool they can pick from.
            let users = match user.role {
                Role::Admin => store.users.iter().collect(),
                Role::Supervisor => service::drivers(store),
                Role::Driver => return Err(AuthError::Forbidden(Role::Admin).into()),
            };
            output::print_users(format, &users)?;
        }
    }
    Ok(())
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        EngineError::Validation(format!("invalid date (expected YYYY-MM-DD): {raw}")).into()
    })
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
    let raw = raw.trim();
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M:%S"))
        .map_err(|_| {
            EngineError::Validation(format!("invalid time (expected HH:MM): {raw}")).into()
        })
}

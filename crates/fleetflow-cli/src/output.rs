//! Output formatting module

use fleetflow_domain::model::{Application, Assignment, Job, User, Vehicle};
use fleetflow_domain::service;
use fleetflow_domain::EntityStore;
use fleetflow_types::{OutputFormat, Result};

/// Resolve a user reference for display, tolerating dangling ids
fn user_name<'a>(store: &'a EntityStore, id: &str) -> &'a str {
    store
        .user(id)
        .map(|u| u.name.as_str())
        .unwrap_or("(unknown)")
}

fn job_route(store: &EntityStore, id: &str) -> String {
    store
        .job(id)
        .map(|j| format!("{} -> {}", j.route_from, j.route_to))
        .unwrap_or_else(|| "(unknown)".to_string())
}

pub fn print_jobs(format: OutputFormat, store: &EntityStore, jobs: &[&Job]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(jobs)?);
        return Ok(());
    }
    if jobs.is_empty() {
        println!("No jobs");
        return Ok(());
    }
    println!(
        "{:<42} {:<26} {:<11} {:<6} {:>6} {:<9} {}",
        "ID", "Route", "Date", "Time", "Slots", "Status", "Vehicle type"
    );
    for job in jobs {
        let route = format!("{} -> {}", job.route_from, job.route_to);
        let slots = format!("{}/{}", job.available_slots, job.slot_count);
        let completed = if service::job_completed(store, &job.id) {
            " (completed)"
        } else {
            ""
        };
        println!(
            "{:<42} {:<26} {:<11} {:<6} {:>6} {:<9} {}{}",
            job.id,
            route,
            job.date,
            job.time.format("%H:%M"),
            slots,
            job.status,
            job.requested_vehicle_type.as_deref().unwrap_or("-"),
            completed
        );
    }
    Ok(())
}

pub fn print_applications(
    format: OutputFormat,
    store: &EntityStore,
    applications: &[&Application],
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(applications)?);
        return Ok(());
    }
    if applications.is_empty() {
        println!("No applications");
        return Ok(());
    }
    println!(
        "{:<42} {:<26} {:<18} {:<18} {}",
        "ID", "Job", "Supervisor", "Driver", "Status"
    );
    for app in applications {
        let driver = app
            .requested_driver_id
            .as_deref()
            .map(|id| user_name(store, id))
            .unwrap_or("(default)");
        println!(
            "{:<42} {:<26} {:<18} {:<18} {}",
            app.id,
            job_route(store, &app.job_id),
            user_name(store, &app.supervisor_id),
            driver,
            app.status
        );
    }
    Ok(())
}

pub fn print_assignments(
    format: OutputFormat,
    store: &EntityStore,
    assignments: &[&Assignment],
) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(assignments)?);
        return Ok(());
    }
    if assignments.is_empty() {
        println!("No assignments");
        return Ok(());
    }
    println!(
        "{:<45} {:<26} {:<18} {:<18} {:<14} {}",
        "ID", "Job", "Supervisor", "Driver", "Vehicle", "Status"
    );
    for assignment in assignments {
        let vehicle = store
            .vehicle(&assignment.vehicle_id)
            .map(|v| v.number.as_str())
            .unwrap_or("(unknown)");
        println!(
            "{:<45} {:<26} {:<18} {:<18} {:<14} {}",
            assignment.id,
            job_route(store, &assignment.job_id),
            user_name(store, &assignment.supervisor_id),
            user_name(store, &assignment.driver_id),
            vehicle,
            assignment.status
        );
    }
    Ok(())
}

pub fn print_vehicles(format: OutputFormat, vehicles: &[&Vehicle]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(vehicles)?);
        return Ok(());
    }
    if vehicles.is_empty() {
        println!("No vehicles");
        return Ok(());
    }
    println!("{:<42} {:<16} {}", "ID", "Number", "Type");
    for vehicle in vehicles {
        println!(
            "{:<42} {:<16} {}",
            vehicle.id, vehicle.number, vehicle.vehicle_type
        );
    }
    Ok(())
}

pub fn print_vehicle_types(format: OutputFormat, types: &[String]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(types)?);
        return Ok(());
    }
    if types.is_empty() {
        println!("No vehicle types configured");
        return Ok(());
    }
    for name in types {
        println!("{}", name);
    }
    Ok(())
}

pub fn print_users(format: OutputFormat, users: &[&User]) -> Result<()> {
    if format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(users)?);
        return Ok(());
    }
    println!("{:<42} {:<20} {:<24} {}", "ID", "Name", "Login", "Role");
    for user in users {
        println!(
            "{:<42} {:<20} {:<24} {}",
            user.id, user.name, user.login, user.role
        );
    }
    Ok(())
}

//! FleetFlow - transport job coordination for admins, supervisors, and drivers
//!
//! A CLI over the job/application/assignment lifecycle engine.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use clap::{Parser, Subcommand};
use colored::Colorize;
use sysexits::ExitCode;
use zenith_lib::Repository;

mod appointment;
mod feedback;
mod prescription;
mod profile;
mod reminder;
mod theme;
mod wellness;

#[derive(Parser, Debug)]
#[command(name = "zenith")]
#[command(author, version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// Operate on reminders
    #[command(subcommand)]
    Reminder(reminder::Command),
    /// Operate on appointments
    #[command(subcommand)]
    Appointment(appointment::Command),
    /// Operate on prescriptions
    #[command(subcommand)]
    Prescription(prescription::Command),
    /// Operate on feedback
    #[command(subcommand)]
    Feedback(feedback::Command),
    /// Operate on the health profile
    #[command(subcommand)]
    Profile(profile::Command),
    /// Operate on the theme preference
    #[command(subcommand)]
    Theme(theme::Command),
    /// Browse the wellness library
    #[command(subcommand)]
    Wellness(wellness::Command),
}

fn main() -> ExitCode {
    human_panic::setup_panic!();
    tracing_subscriber::fmt().init();

    let cli = Cli::parse();
    let repo = match Repository::new() {
        Ok(repo) => repo,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            return ExitCode::Unavailable;
        }
    };

    let result = match &cli.command {
        Command::Reminder(cmd) => reminder::handle(&repo, cmd),
        Command::Appointment(cmd) => appointment::handle(&repo, cmd),
        Command::Prescription(cmd) => prescription::handle(&repo, cmd),
        Command::Feedback(cmd) => feedback::handle(&repo, cmd),
        Command::Profile(cmd) => profile::handle(&repo, cmd),
        Command::Theme(cmd) => theme::handle(&repo, cmd),
        Command::Wellness(cmd) => wellness::handle(cmd),
    };

    match result {
        Ok(()) => ExitCode::Ok,
        Err(err) => {
            eprintln!("{}", err.to_string().red());
            ExitCode::DataErr
        }
    }
}

/// Accept times both with and without seconds.
pub(crate) fn parse_time(raw: &str) -> Result<chrono::NaiveTime, chrono::ParseError> {
    chrono::NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| chrono::NaiveTime::parse_from_str(raw, "%H:%M:%S"))
}

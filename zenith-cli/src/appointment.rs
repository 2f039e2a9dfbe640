use chrono::{NaiveDate, NaiveTime};
use clap::Subcommand;
use colored::{ColoredString, Colorize};
use zenith_lib::{
    Repository,
    repository::{AppointmentFilter, AppointmentStatus},
};

use crate::parse_time;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List appointments
    List {
        /// Only show appointments with this status
        #[arg(short, long, default_value_t = AppointmentFilter::All)]
        filter: AppointmentFilter,
    },
    /// Book a new appointment
    Book {
        doctor: String,
        /// Date, e.g. 2026-09-01
        date: NaiveDate,
        /// Time of day, e.g. 10:15
        #[arg(value_parser = parse_time)]
        time: NaiveTime,
    },
    /// Cancel an appointment
    Cancel { id: u64 },
    /// Mark an appointment as completed
    Complete { id: u64 },
}

pub fn handle(repo: &Repository, cmd: &Command) -> zenith_lib::Result<()> {
    match cmd {
        Command::List { filter } => {
            for appointment in filter.apply(&repo.appointments()?) {
                println!(
                    "{:>4}  {}  {}  Dr. {}  [{}]",
                    appointment.id(),
                    appointment.date(),
                    appointment.time().format("%H:%M"),
                    appointment.doctor(),
                    status_label(appointment.status())
                );
            }
        }
        Command::Book { doctor, date, time } => {
            let appointment = repo.book_appointment(doctor, *date, *time)?;
            println!("Booked appointment {}", appointment.id());
        }
        Command::Cancel { id } => {
            repo.cancel_appointment((*id).into())?;
        }
        Command::Complete { id } => {
            repo.complete_appointment((*id).into())?;
        }
    }

    Ok(())
}

fn status_label(status: AppointmentStatus) -> ColoredString {
    match status {
        AppointmentStatus::Upcoming => "upcoming".blue(),
        AppointmentStatus::Completed => "completed".green(),
        AppointmentStatus::Cancelled => "cancelled".red(),
    }
}

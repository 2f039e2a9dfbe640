use chrono::NaiveTime;
use clap::Subcommand;
use zenith_lib::Repository;

use crate::parse_time;

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List reminders
    List,
    /// Add a new reminder
    Add {
        title: String,
        /// Time of day, e.g. 08:30
        #[arg(value_parser = parse_time)]
        time: NaiveTime,
    },
    /// Remove a reminder
    Remove { id: u64 },
}

pub fn handle(repo: &Repository, cmd: &Command) -> zenith_lib::Result<()> {
    match cmd {
        Command::List => {
            for reminder in repo.reminders()? {
                println!(
                    "{:>4}  {}  {}",
                    reminder.id(),
                    reminder.time().format("%H:%M"),
                    reminder.title()
                );
            }
        }
        Command::Add { title, time } => {
            let reminder = repo.add_reminder(title, *time)?;
            println!("Added reminder {}", reminder.id());
        }
        Command::Remove { id } => {
            repo.remove_reminder((*id).into())?;
        }
    }

    Ok(())
}

use clap::Subcommand;
use colored::{ColoredString, Colorize};
use zenith_lib::{Repository, repository::PrescriptionStatus};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List prescriptions
    List,
    /// Add a new prescription
    Add {
        name: String,
        /// Dosage, e.g. "500mg"
        dosage: String,
        /// Frequency, e.g. "Twice daily"
        frequency: String,
    },
    /// Request a refill
    Refill { id: u64 },
    /// Mark a course of medication as completed
    Complete { id: u64 },
}

pub fn handle(repo: &Repository, cmd: &Command) -> zenith_lib::Result<()> {
    match cmd {
        Command::List => {
            for prescription in repo.prescriptions()? {
                let refills = match prescription.refills() {
                    0 => String::new(),
                    count => format!("  ({count} refills)"),
                };
                println!(
                    "{:>4}  {}  {}  {}  [{}]{refills}",
                    prescription.id(),
                    prescription.name(),
                    prescription.dosage(),
                    prescription.frequency(),
                    status_label(prescription.status()),
                );
            }
        }
        Command::Add {
            name,
            dosage,
            frequency,
        } => {
            let prescription = repo.add_prescription(name, dosage, frequency)?;
            println!("Added prescription {}", prescription.id());
        }
        Command::Refill { id } => {
            let prescription = repo.request_refill((*id).into())?;
            println!(
                "Requested refill #{} for {}",
                prescription.refills(),
                prescription.name()
            );
        }
        Command::Complete { id } => {
            repo.complete_prescription((*id).into())?;
        }
    }

    Ok(())
}

fn status_label(status: PrescriptionStatus) -> ColoredString {
    match status {
        PrescriptionStatus::Active => "active".green(),
        PrescriptionStatus::Completed => "completed".dimmed(),
    }
}

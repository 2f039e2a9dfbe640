use chrono::NaiveDate;
use clap::Subcommand;
use zenith_lib::{Repository, repository::BloodType};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the stored health profile
    Show,
    /// Update fields of the health profile
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        phone: Option<String>,
        /// Date of birth, e.g. 1990-04-21
        #[arg(long)]
        dob: Option<NaiveDate>,
        /// Blood type, e.g. "O+" or "AB-"
        #[arg(long)]
        blood_type: Option<BloodType>,
        #[arg(long)]
        height: Option<String>,
        #[arg(long)]
        weight: Option<String>,
        #[arg(long)]
        allergies: Option<String>,
    },
}

pub fn handle(repo: &Repository, cmd: &Command) -> zenith_lib::Result<()> {
    match cmd {
        Command::Show => {
            let profile = repo.health_profile()?;
            let dob = profile
                .dob()
                .map(|dob| dob.to_string())
                .unwrap_or_default();

            println!("Name:        {}", profile.name());
            println!("Email:       {}", profile.email());
            println!("Phone:       {}", profile.phone());
            println!("DOB:         {dob}");
            println!("Blood type:  {}", profile.blood_type());
            println!("Height:      {}", profile.height());
            println!("Weight:      {}", profile.weight());
            println!("Allergies:   {}", profile.allergies());
        }
        Command::Set {
            name,
            email,
            phone,
            dob,
            blood_type,
            height,
            weight,
            allergies,
        } => {
            let mut profile = repo.health_profile()?;

            if let Some(name) = name {
                profile.set_name(name.clone());
            }
            if let Some(email) = email {
                profile.set_email(email.clone());
            }
            if let Some(phone) = phone {
                profile.set_phone(phone.clone());
            }
            if let Some(dob) = dob {
                profile.set_dob(Some(*dob));
            }
            if let Some(blood_type) = blood_type {
                profile.set_blood_type(*blood_type);
            }
            if let Some(height) = height {
                profile.set_height(height.clone());
            }
            if let Some(weight) = weight {
                profile.set_weight(weight.clone());
            }
            if let Some(allergies) = allergies {
                profile.set_allergies(allergies.clone());
            }

            repo.save_health_profile(&profile)?;
        }
    }

    Ok(())
}

use clap::Subcommand;
use zenith_lib::{
    Repository,
    repository::{FeedbackKind, Rating},
};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List submitted feedback
    List,
    /// Submit feedback
    Submit {
        name: String,
        /// What the feedback is about: doctor, service, or facility
        kind: FeedbackKind,
        /// Stars, 1 to 5
        rating: u8,
        message: String,
    },
}

pub fn handle(repo: &Repository, cmd: &Command) -> zenith_lib::Result<()> {
    match cmd {
        Command::List => {
            for feedback in repo.feedbacks()? {
                println!(
                    "{}  {}  {} • {}\n      {}",
                    stars(feedback.rating()),
                    feedback.name(),
                    feedback.kind(),
                    feedback.date(),
                    feedback.message()
                );
            }
        }
        Command::Submit {
            name,
            kind,
            rating,
            message,
        } => {
            let feedback = repo.submit_feedback(name, Rating::new(*rating), *kind, message)?;
            println!("Thanks for your feedback, {}!", feedback.name());
        }
    }

    Ok(())
}

fn stars(rating: Rating) -> String {
    "★".repeat(usize::from(rating.stars()))
}

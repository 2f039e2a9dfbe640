use clap::Subcommand;
use zenith_lib::{Repository, repository::ThemeMode};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show the current theme
    Show,
    /// Flip between light and dark
    Toggle,
    /// Set the theme: light or dark
    Set { mode: ThemeMode },
}

pub fn handle(repo: &Repository, cmd: &Command) -> zenith_lib::Result<()> {
    let session = repo.session();

    match cmd {
        Command::Show => println!("{}", session.theme()),
        Command::Toggle => println!("{}", session.toggle_theme()?),
        Command::Set { mode } => session.set_theme(*mode)?,
    }

    Ok(())
}

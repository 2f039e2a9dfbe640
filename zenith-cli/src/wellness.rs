use clap::Subcommand;
use zenith_lib::wellness::{self, Category};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List wellness articles
    List {
        /// Only show articles in this category, e.g. nutrition or mental-health
        #[arg(short, long)]
        category: Option<Category>,
        /// Only show articles whose title or summary contains this text
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

pub fn handle(cmd: &Command) -> zenith_lib::Result<()> {
    match cmd {
        Command::List { category, search } => {
            for article in wellness::search(*category, search) {
                println!(
                    "{}  {}  [{}]\n    {}",
                    article.emoji,
                    article.title,
                    article.category.label(),
                    article.summary
                );
            }
        }
    }

    Ok(())
}

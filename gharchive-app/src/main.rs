mod args;
mod commands;
mod progress;
mod prompt;

use crate::args::{Args, Command};
use anyhow::Result;
use clap::Parser;
use gharchive_lib::GitHubClient;

const GITHUB_API_URL: &str = "https://api.github.com/";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let Some(token) = args.github_token.clone() else {
        eprintln!("Error: GitHub token not found.");
        eprintln!("Set GITHUB_TOKEN in the environment or pass --token.");
        eprintln!("You can create a token at https://github.com/settings/tokens");
        std::process::exit(1);
    };

    // Command failures are reported through printed output, not the exit
    // code: only a missing token exits non-zero.
    if let Err(e) = run(args, &token).await {
        eprintln!("An error occurred: {e}");
    }

    Ok(())
}

async fn run(args: Args, token: &str) -> Result<()> {
    let github = GitHubClient::new(GITHUB_API_URL, token)?;

    match args.command {
        Command::List { username } => commands::list(&github, &username).await,
        Command::ListForks { username } => commands::list_forks(&github, &username).await,
        Command::Archive { username, force } => {
            commands::archive(&github, &username, force, args.quiet).await
        }
        Command::DeleteForks { username, force } => {
            commands::delete_forks(&github, &username, force, args.quiet).await
        }
    }
}

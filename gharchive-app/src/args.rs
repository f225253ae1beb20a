use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[clap(
    name = "gharchive",
    about = "List, archive and delete a GitHub user's repositories",
    version
)]
pub struct Args {
    #[clap(
        short = 't',
        long = "token",
        help = "GitHub REST API token",
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        global = true
    )]
    pub github_token: Option<String>,

    #[clap(
        short = 'q',
        long = "quiet",
        help = "Suppress per-repository progress output",
        global = true
    )]
    pub quiet: bool,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List a user's active, non-fork repositories
    List {
        /// GitHub username whose repositories to list
        username: String,
    },
    /// List a user's active fork repositories
    ListForks {
        /// GitHub username whose fork repositories to list
        username: String,
    },
    /// Interactively pick and archive a user's repositories
    Archive {
        /// GitHub username whose repositories to archive
        username: String,
        /// Skip the confirmation prompt
        #[clap(long = "force")]
        force: bool,
    },
    /// Interactively pick and delete a user's fork repositories
    DeleteForks {
        /// GitHub username whose fork repositories to delete
        username: String,
        /// Skip the confirmation prompt
        #[clap(long = "force")]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parses_archive_with_force() {
        let args = Args::try_parse_from([
            "gharchive", "--token", "t", "archive", "testuser", "--force",
        ])
        .unwrap();

        match args.command {
            Command::Archive { username, force } => {
                assert_eq!("testuser", username);
                assert!(force);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_quiet_is_accepted_after_the_subcommand() {
        let args =
            Args::try_parse_from(["gharchive", "--token", "t", "delete-forks", "testuser", "--quiet"])
                .unwrap();

        assert!(args.quiet);
    }
}

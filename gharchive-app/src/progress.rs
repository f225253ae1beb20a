use colored::Colorize;
use gharchive_lib::{GitHubClientError, ProgressSink, RepoOperation};
use std::io::{self, Write};

/// Narrates each batch step on the console, one repository per line.
pub struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn batch_started(&self, operation: RepoOperation, count: usize) {
        let process = match operation {
            RepoOperation::Archive => "archiving",
            RepoOperation::Delete => "deletion",
        };
        println!("\nStarting {process} process ({count} repositories)...");
    }

    fn step_started(&self, operation: RepoOperation, name: &str) {
        // outcome marker lands on the same line
        print!("{} {name}... ", operation.verb());
        let _ = io::stdout().flush();
    }

    fn step_succeeded(&self, _operation: RepoOperation, _name: &str) {
        println!("{}", "Success".green());
    }

    fn step_failed(&self, _operation: RepoOperation, _name: &str, error: &GitHubClientError) {
        println!("{}", "Failed".red());
        eprintln!("   Error: {error}");
    }
}

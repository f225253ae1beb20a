use crate::progress::ConsoleProgress;
use crate::prompt;
use anyhow::Result;
use colored::Colorize;
use gharchive_lib::{
    list_repositories, run_batch, GitHubApi, OperationResult, Repo, RepoFilter, RepoOperation,
    SilentProgress,
};

pub async fn list(api: &impl GitHubApi, username: &str) -> Result<()> {
    println!("Fetching non-forked repositories for user {username}...");
    let repos = list_repositories(api, username, RepoFilter::Owned).await?;

    if repos.is_empty() {
        println!("No repositories found for this user.");
        return Ok(());
    }

    println!("\nFound {} repositories created by {username}:\n", repos.len());
    for (index, repo) in repos.iter().enumerate() {
        print_repo(index, repo, false);
    }

    Ok(())
}

pub async fn list_forks(api: &impl GitHubApi, username: &str) -> Result<()> {
    println!("Fetching fork repositories for user {username}...");
    let repos = list_repositories(api, username, RepoFilter::Forks).await?;

    if repos.is_empty() {
        println!("No fork repositories found for this user.");
        return Ok(());
    }

    println!(
        "\nFound {} fork repositories created by {username}:\n",
        repos.len()
    );
    for (index, repo) in repos.iter().enumerate() {
        print_repo(index, repo, true);
    }

    Ok(())
}

pub async fn archive(api: &impl GitHubApi, username: &str, force: bool, quiet: bool) -> Result<()> {
    println!("Fetching non-forked repositories for user {username}...");
    let repos = list_repositories(api, username, RepoFilter::Owned).await?;

    if repos.is_empty() {
        println!("No repositories found for this user.");
        return Ok(());
    }
    println!("Found {} repositories created by {username}.", repos.len());

    let selected = prompt::select_repos(&repos, "Select repositories to archive")?;
    if selected.is_empty() {
        println!("No repositories selected for archiving.");
        return Ok(());
    }

    if !force {
        let question = format!(
            "You're about to archive {} repositories. This action cannot be easily undone. Continue?",
            selected.len()
        );
        if !prompt::confirm(&question)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let results = mutate(api, username, &selected, RepoOperation::Archive, quiet).await;
    print_summary("Archiving complete!", RepoOperation::Archive, &results);

    Ok(())
}

pub async fn delete_forks(
    api: &impl GitHubApi,
    username: &str,
    force: bool,
    quiet: bool,
) -> Result<()> {
    println!("Fetching fork repositories for user {username}...");
    let repos = list_repositories(api, username, RepoFilter::Forks).await?;

    if repos.is_empty() {
        println!("No fork repositories found for this user.");
        return Ok(());
    }
    println!(
        "Found {} fork repositories created by {username}.",
        repos.len()
    );

    let selected = prompt::select_repos(&repos, "Select fork repositories to delete")?;
    if selected.is_empty() {
        println!("No repositories selected for deletion.");
        return Ok(());
    }

    if !force {
        let question = format!(
            "You're about to delete {} repositories. This action CANNOT be undone. Continue?",
            selected.len()
        );
        if !prompt::confirm(&question)? {
            println!("Operation cancelled.");
            return Ok(());
        }
    }

    let results = mutate(api, username, &selected, RepoOperation::Delete, quiet).await;
    print_summary("Deletion complete!", RepoOperation::Delete, &results);

    Ok(())
}

async fn mutate(
    api: &impl GitHubApi,
    owner: &str,
    names: &[String],
    operation: RepoOperation,
    quiet: bool,
) -> Vec<OperationResult> {
    if quiet {
        run_batch(api, owner, names, operation, &SilentProgress).await
    } else {
        run_batch(api, owner, names, operation, &ConsoleProgress).await
    }
}

fn print_repo(index: usize, repo: &Repo, show_fork_parent: bool) {
    println!("{}. {}", index + 1, repo.name.yellow());
    if show_fork_parent {
        if let Some((owner, _)) = repo.full_name.split_once('/') {
            println!("   Forked from: {owner}");
        }
    }
    println!("   Visibility: {}", visibility(repo));
    println!("   Stars: {}", repo.stargazers_count);
    println!(
        "   Language: {}",
        repo.language.as_deref().unwrap_or("Not specified")
    );
    println!("   Created: {}", created_date(repo));
    println!("   URL: {}", repo.html_url);
    if let Some(description) = &repo.description {
        println!("   Description: {description}");
    }
    println!();
}

fn visibility(repo: &Repo) -> &'static str {
    if repo.private {
        "Private"
    } else {
        "Public"
    }
}

pub(crate) fn created_date(repo: &Repo) -> String {
    match repo.created_at {
        Some(timestamp) => timestamp.format("%Y-%m-%d").to_string(),
        None => String::from("unknown"),
    }
}

fn print_summary(heading: &str, operation: RepoOperation, results: &[OperationResult]) {
    let (past, infinitive) = match operation {
        RepoOperation::Archive => ("archived", "archive"),
        RepoOperation::Delete => ("deleted", "delete"),
    };
    let successful = results.iter().filter(|r| r.success).count();
    let failed = results.len() - successful;

    println!("\n{heading}");
    println!("{} Successfully {past}: {successful}", "✔".green());
    if failed > 0 {
        println!("{} Failed to {infinitive}: {failed}", "✖".red());
    }
}

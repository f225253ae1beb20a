use crate::commands::created_date;
use anyhow::{Context, Result};
use gharchive_lib::Repo;
use std::io::{self, BufRead, Write};

/// Presents a numbered menu of repositories and reads a selection from
/// stdin. Accepts `all` or a comma/space separated list of indices; invalid
/// entries are reported and skipped. An empty line selects nothing.
pub fn select_repos(repos: &[Repo], message: &str) -> Result<Vec<String>> {
    println!("\n{message}:");
    for (index, repo) in repos.iter().enumerate() {
        println!(
            "  {:>3}. {} ({}, {} stars, created: {})",
            index + 1,
            repo.name,
            if repo.private { "Private" } else { "Public" },
            repo.stargazers_count,
            created_date(repo),
        );
    }
    print!("Enter numbers (e.g. 1,3,5), 'all', or press Enter to skip: ");
    io::stdout().flush().context("failed to flush stdout")?;

    let line = read_line()?;
    let (picked, rejected) = parse_selection(&line, repos.len());
    for token in &rejected {
        println!("Ignoring invalid selection '{token}'");
    }

    Ok(picked
        .into_iter()
        .map(|index| repos[index].name.clone())
        .collect())
}

/// Asks a yes/no question; only `y`/`yes` (case-insensitive) confirms.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush().context("failed to flush stdout")?;

    let line = read_line()?;
    let answer = line.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes"))
}

fn read_line() -> Result<String> {
    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    Ok(line)
}

/// Splits the raw selection line into zero-based indices, deduplicated and
/// in the order typed, plus the tokens that did not name a menu entry.
fn parse_selection(input: &str, count: usize) -> (Vec<usize>, Vec<String>) {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return (Vec::new(), Vec::new());
    }
    if trimmed.eq_ignore_ascii_case("all") {
        return ((0..count).collect(), Vec::new());
    }

    let mut picked = Vec::new();
    let mut rejected = Vec::new();
    for token in trimmed.split([',', ' ']).filter(|t| !t.is_empty()) {
        match token.parse::<usize>() {
            Ok(n) if (1..=count).contains(&n) => {
                if !picked.contains(&(n - 1)) {
                    picked.push(n - 1);
                }
            }
            _ => rejected.push(token.to_string()),
        }
    }
    (picked, rejected)
}

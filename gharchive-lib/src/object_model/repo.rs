use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One repository as returned by the list endpoint. Missing fields fall back
/// to their defaults (booleans to `false`) instead of rejecting the record,
/// so a sparse page entry still lists and filters.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Repo {
    pub name: String,
    pub full_name: String,
    pub private: bool,
    pub html_url: String,
    pub description: Option<String>,
    pub fork: bool,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub pushed_at: Option<DateTime<Utc>>,
    pub stargazers_count: u32,
    pub language: Option<String>,
    pub archived: bool,
}

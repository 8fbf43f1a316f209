use chrono::{DateTime, Datelike, Utc};
use serde::Deserialize;
use url::Url;

/// A repository record as returned by the GitHub repository-listing endpoint.
///
/// Snapshot fetched once per run; never persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct RepoSummary {
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    /// Null for a repository that has never been pushed.
    pub pushed_at: Option<DateTime<Utc>>,
    pub html_url: String,
    pub homepage: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub archived: bool,
}

impl RepoSummary {
    /// Homepage URL, only when it is an absolute http(s) URL.
    pub fn demo_url(&self) -> Option<&str> {
        let homepage = self.homepage.as_deref()?;
        let parsed = Url::parse(homepage).ok()?;
        matches!(parsed.scheme(), "http" | "https").then_some(homepage)
    }
}

/// Rendered view of one selected repository. One-to-one with a shown
/// [`RepoSummary`]; built at render time.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayCard {
    pub name: String,
    pub description: String,
    pub language: String,
    pub stars: u32,
    pub forks: u32,
    pub updated_year: Option<i32>,
    pub source_url: String,
    pub demo_url: Option<String>,
}

impl DisplayCard {
    pub fn from_repo(repo: &RepoSummary) -> Self {
        DisplayCard {
            name: repo.name.clone(),
            description: repo
                .description
                .clone()
                .unwrap_or_else(|| "No description provided.".to_string()),
            language: repo.language.clone().unwrap_or_else(|| "Repo".to_string()),
            stars: repo.stargazers_count,
            forks: repo.forks_count,
            updated_year: repo.pushed_at.map(|t| t.year()),
            source_url: repo.html_url.clone(),
            demo_url: repo.demo_url().map(str::to_string),
        }
    }
}

/// One language's slice of the aggregated tally.
#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub name: String,
    pub count: u32,
    /// Share of the total tally, rounded to the nearest integer percent.
    pub percent: u32,
    /// Cosmetic reveal delay for the progress-bar animation.
    pub reveal_delay_ms: u32,
}

/// A numeric stat badge on the page, identified by its visible label.
#[derive(Debug, Clone, PartialEq)]
pub struct StatBadge {
    pub label: String,
    pub count: u64,
}

/// Produced DOM contract for one badge: the `data-count` attribute and the
/// text content both carry the reconciled value.
#[derive(Debug, Clone, PartialEq)]
pub struct BadgeUpdate {
    pub label: String,
    pub data_count: u64,
    pub text: String,
}

#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use repo_showcase::models::RepoSummary;

pub fn pushed(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
}

/// Baseline repository that passes every selection predicate.
pub fn repo(name: &str, stars: u32, description: Option<&str>, language: Option<&str>) -> RepoSummary {
    RepoSummary {
        name: name.to_string(),
        description: description.map(str::to_string),
        language: language.map(str::to_string),
        stargazers_count: stars,
        forks_count: 0,
        pushed_at: Some(pushed(2024, 1, 1)),
        html_url: format!("https://github.com/someone/{name}"),
        homepage: None,
        fork: false,
        archived: false,
    }
}

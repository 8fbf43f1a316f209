use crate::error::{Result, ShowcaseError};
use crate::models::RepoSummary;
use reqwest::Client;
use std::time::Duration;

const API_BASE_URL: &str = "https://api.github.com";
const PER_PAGE: u32 = 100;

pub struct GithubClient {
    client: Client,
    base_url: String,
}

impl GithubClient {
    pub fn new() -> Result<Self> {
        Self::with_base_url(API_BASE_URL)
    }

    /// Client against an alternate API root, for tests and proxies.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent("repo-showcase/0.1.0")
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(GithubClient {
            client,
            base_url: base_url.into(),
        })
    }

    /// Fetch the account's public repositories, most recently updated first.
    ///
    /// A single page of up to 100 entries; non-2xx responses become
    /// `RemoteService` errors carrying the status code.
    pub async fn list_user_repos(&self, account: &str) -> Result<Vec<RepoSummary>> {
        if account.is_empty() || account.contains('/') {
            return Err(ShowcaseError::InvalidAccount(account.to_string()));
        }

        let url = format!(
            "{}/users/{}/repos?per_page={}&sort=updated",
            self.base_url, account, PER_PAGE
        );

        let response = self
            .client
            .get(&url)
            .header("Accept", "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ShowcaseError::RemoteService {
                status: status.as_u16(),
            });
        }

        let repos: Vec<RepoSummary> = response.json().await?;
        Ok(repos)
    }
}

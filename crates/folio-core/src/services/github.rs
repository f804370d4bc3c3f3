//! GitHub repositories for the Projects section.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};

use super::http::{FetchError, get_json};
use crate::config::GithubConfig;
use crate::content::GithubProject;

const ACCEPT_GITHUB_V3: &str = "application/vnd.github.v3+json";

#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_url: String,
    username: String,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(http: reqwest::Client, config: &GithubConfig) -> Self {
        Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            username: config.username.trim().to_string(),
            token: config.effective_token(),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.username.is_empty()
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_GITHUB_V3));
        if let Some(token) = &self.token
            && let Ok(value) = HeaderValue::from_str(&format!("token {token}"))
        {
            headers.insert(AUTHORIZATION, value);
        }
        headers
    }

    /// Public repositories, most recently pushed first.
    ///
    /// Skips the user's pages site and profile repository.
    pub async fn try_repositories(&self) -> Result<Vec<GithubProject>, FetchError> {
        let url = format!(
            "{}/users/{}/repos?sort=pushed&direction=desc&per_page=20",
            self.api_url, self.username
        );
        let repos: Vec<GithubProject> =
            get_json(self.http.get(url).headers(self.headers())).await?;
        Ok(repos
            .into_iter()
            .filter(|repo| !repo.name.contains(".github.io") && repo.name != self.username)
            .collect())
    }

    /// Same as [`Self::try_repositories`]; failures yield an empty list.
    pub async fn repositories(&self) -> Vec<GithubProject> {
        if !self.is_configured() {
            tracing::debug!("github username not configured, skipping repositories");
            return Vec::new();
        }
        match self.try_repositories().await {
            Ok(repos) => {
                tracing::info!(count = repos.len(), "loaded github repositories");
                repos
            }
            Err(err) => {
                tracing::warn!(kind = %err.kind, "Error fetching GitHub repositories: {err}");
                Vec::new()
            }
        }
    }
}

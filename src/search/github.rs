use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, USER_AGENT};
use serde::Deserialize;

use crate::config::GitHubConfig;
use crate::error::SearchServiceError;
use crate::models::{RepositoryRecord, DEFAULT_DESCRIPTION, DEFAULT_LANGUAGE};

/// Repository search backend. Implementations do not retry.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn search(&self, keywords: &str) -> Result<Vec<RepositoryRecord>, SearchServiceError>;
}

// ─── GitHub wire types ───────────────────────────────────

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<RawRepository>,
}

/// One item of `/search/repositories`. Any field may be missing or null.
#[derive(Debug, Default, Deserialize)]
struct RawRepository {
    id: Option<u64>,
    name: Option<String>,
    full_name: Option<String>,
    description: Option<String>,
    html_url: Option<String>,
    stargazers_count: Option<u64>,
    language: Option<String>,
    topics: Option<Vec<String>>,
}

#[derive(Deserialize)]
struct GitHubErrorBody {
    message: Option<String>,
}

impl RawRepository {
    fn normalize(self) -> RepositoryRecord {
        RepositoryRecord {
            id: self.id.unwrap_or_default(),
            name: self.name.unwrap_or_default(),
            full_name: self.full_name.unwrap_or_default(),
            description: self
                .description
                .filter(|d| !d.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string()),
            url: self.html_url.unwrap_or_default(),
            star_count: self.stargazers_count.unwrap_or(0),
            primary_language: self
                .language
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            topics: self.topics.unwrap_or_default(),
        }
    }
}

/// Decode a `/search/repositories` body, preserving item order.
pub fn parse_search_response(body: &str) -> Result<Vec<RepositoryRecord>, SearchServiceError> {
    let resp: SearchResponse =
        serde_json::from_str(body).map_err(|e| SearchServiceError::Decode(e.to_string()))?;
    Ok(resp.items.into_iter().map(RawRepository::normalize).collect())
}

/// Prefer GitHub's `{"message": ...}` over the raw body.
fn error_message(body: &str) -> String {
    serde_json::from_str::<GitHubErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .unwrap_or_else(|| body.to_string())
}

pub struct GitHubClient {
    client: reqwest::Client,
    config: GitHubConfig,
}

impl GitHubClient {
    pub fn new(client: reqwest::Client, config: GitHubConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl RepositorySource for GitHubClient {
    async fn search(&self, keywords: &str) -> Result<Vec<RepositoryRecord>, SearchServiceError> {
        let url = format!(
            "{}/search/repositories",
            self.config.api_url.trim_end_matches('/')
        );
        let per_page = self.config.per_page.clamp(1, 100).to_string();

        let mut req = self
            .client
            .get(&url)
            .query(&[
                ("q", keywords),
                ("sort", "stars"),
                ("order", "desc"),
                ("per_page", per_page.as_str()),
            ])
            .header(USER_AGENT, "gitmap")
            .header(ACCEPT, "application/vnd.github+json");
        if let Some(token) = &self.config.token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| SearchServiceError::Transport(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| SearchServiceError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(SearchServiceError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        parse_search_response(&body)
    }
}

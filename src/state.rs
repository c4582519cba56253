use std::sync::Arc;

use crate::config::Config;
use crate::llm::keywords::GeminiClient;
use crate::resolver::KeywordResolver;
use crate::retry::RetryPolicy;
use crate::search::github::GitHubClient;
use crate::search::service::SearchService;

/// Shared application state. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub search: SearchService,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(30))
            .build()?;

        let generator = GeminiClient::new(http_client.clone(), config.llm.clone());
        let resolver = KeywordResolver::new(Arc::new(generator), RetryPolicy::from(&config.retry));
        let source = GitHubClient::new(http_client, config.github.clone());

        Ok(Self::with_service(
            config,
            SearchService::new(resolver, Arc::new(source)),
        ))
    }

    /// Build state around an already assembled pipeline.
    pub fn with_service(config: Config, search: SearchService) -> Self {
        Self {
            config: Arc::new(config),
            search,
        }
    }
}

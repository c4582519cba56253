use std::sync::Arc;

use crate::error::SearchServiceError;
use crate::models::{ResolvedKeywords, SearchResult};
use crate::resolver::KeywordResolver;
use crate::search::github::RepositorySource;

/// Search pipeline:
///   1. Blank query → empty result, no upstream calls
///   2. Keyword resolution (retried), falling back to the raw query
///   3. Repository search with the resolved text (not retried)
#[derive(Clone)]
pub struct SearchService {
    resolver: KeywordResolver,
    source: Arc<dyn RepositorySource>,
}

impl SearchService {
    pub fn new(resolver: KeywordResolver, source: Arc<dyn RepositorySource>) -> Self {
        Self { resolver, source }
    }

    pub async fn perform_search(
        &self,
        raw_query: &str,
    ) -> Result<SearchResult, SearchServiceError> {
        let query = raw_query.trim();
        if query.is_empty() {
            return Ok(SearchResult::empty());
        }

        // ── Step 1: Keyword resolution ───────────────────────
        let keywords = match self.resolver.resolve(query).await {
            Ok(resolved) => {
                tracing::info!("Keywords for {query:?}: {:?}", resolved.text);
                resolved
            }
            Err(e) => {
                tracing::warn!("Keyword generation failed, using original query: {e}");
                ResolvedKeywords::fallback(query)
            }
        };

        // ── Step 2: Repository search ────────────────────────
        let repositories = self.source.search(&keywords.text).await.map_err(|e| {
            tracing::error!("Repository search failed for {:?}: {e}", keywords.text);
            e
        })?;
        tracing::info!(
            "Found {} repositories for {:?} (fallback: {})",
            repositories.len(),
            keywords.text,
            keywords.is_fallback
        );

        Ok(SearchResult {
            repositories,
            keywords: keywords.text,
            is_fallback: keywords.is_fallback,
            original_query: query.to_string(),
        })
    }
}

use std::sync::Arc;

use crate::error::KeywordError;
use crate::llm::keywords::KeywordGenerator;
use crate::models::ResolvedKeywords;
use crate::retry::RetryPolicy;

/// Turns a free-text query into repository-search keywords.
///
/// `resolve` applies the retry policy around the single-shot generator and
/// returns the last error once the budget is spent. Falling back to the
/// raw query is the caller's decision.
#[derive(Clone)]
pub struct KeywordResolver {
    generator: Arc<dyn KeywordGenerator>,
    policy: RetryPolicy,
}

impl KeywordResolver {
    pub fn new(generator: Arc<dyn KeywordGenerator>, policy: RetryPolicy) -> Self {
        Self { generator, policy }
    }

    pub async fn resolve(&self, raw_query: &str) -> Result<ResolvedKeywords, KeywordError> {
        let generator = &self.generator;
        let text = self
            .policy
            .run(move |attempt| {
                tracing::debug!("Keyword generation attempt {attempt} for {raw_query:?}");
                generator.generate(raw_query)
            })
            .await?;
        Ok(ResolvedKeywords::generated(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;
    use tokio::time::Instant;

    #[derive(Default)]
    struct Recorder {
        calls: Mutex<Vec<Instant>>,
    }

    impl Recorder {
        fn record(&self) -> usize {
            let mut calls = self.calls.lock().unwrap();
            calls.push(Instant::now());
            calls.len()
        }

        fn times(&self) -> Vec<Instant> {
            self.calls.lock().unwrap().clone()
        }
    }

    struct Scripted {
        recorder: Recorder,
        /// Attempt number (1-based) that succeeds; None means never.
        succeed_on: Option<usize>,
        failure: fn() -> KeywordError,
    }

    #[async_trait]
    impl KeywordGenerator for Scripted {
        async fn generate(&self, _raw_query: &str) -> Result<String, KeywordError> {
            let n = self.recorder.record();
            match self.succeed_on {
                Some(k) if n >= k => Ok("fetch axios HTTP client curl".to_string()),
                _ => Err((self.failure)()),
            }
        }
    }

    fn resolver(
        succeed_on: Option<usize>,
        failure: fn() -> KeywordError,
    ) -> (KeywordResolver, Arc<Scripted>) {
        let generator = Arc::new(Scripted {
            recorder: Recorder::default(),
            succeed_on,
            failure,
        });
        (
            KeywordResolver::new(generator.clone(), RetryPolicy::default()),
            generator,
        )
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_uses_generated_text() {
        let (resolver, generator) = resolver(Some(1), || KeywordError::Timeout(8));
        let resolved = resolver.resolve("HTTP client library").await.unwrap();
        assert_eq!(resolved, ResolvedKeywords::generated("fetch axios HTTP client curl"));
        assert_eq!(generator.recorder.times().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_resolve_makes_at_most_three_spaced_attempts() {
        let (resolver, generator) = resolver(None, || KeywordError::Timeout(8));
        let err = resolver.resolve("HTTP client library").await.unwrap_err();
        assert!(matches!(err, KeywordError::Timeout(_)));

        let times = generator.recorder.times();
        assert_eq!(times.len(), 3);
        for pair in times.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_secs(2));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rate_limit_retried_like_any_failure() {
        let (resolver, generator) = resolver(None, || KeywordError::RateLimited("quota".into()));
        let err = resolver.resolve("Database ORM").await.unwrap_err();
        assert!(matches!(err, KeywordError::RateLimited(_)));
        let times = generator.recorder.times();
        assert_eq!(times.len(), 3);
        assert_eq!(times[2] - times[0], Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_then_success() {
        let (resolver, generator) =
            resolver(Some(3), || KeywordError::MalformedResponse("no parts".into()));
        let resolved = resolver.resolve("React UI components").await.unwrap();
        assert!(!resolved.is_fallback);
        assert_eq!(generator.recorder.times().len(), 3);
    }
}

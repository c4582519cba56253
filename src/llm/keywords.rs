use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::config::LlmConfig;
use crate::error::KeywordError;

const MAX_QUERY_CHARS: usize = 500;
const MIN_KEYWORD_CHARS: usize = 3;

/// Single-shot keyword generation. Implementations never retry; the
/// caller owns the retry policy.
#[async_trait]
pub trait KeywordGenerator: Send + Sync {
    async fn generate(&self, raw_query: &str) -> Result<String, KeywordError>;
}

/// Strip control characters and double quotes, cap the length. The query
/// is embedded inside a quoted block of the prompt.
pub fn sanitize_for_prompt(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_control() && *c != '"')
        .take(MAX_QUERY_CHARS)
        .collect::<String>()
        .trim()
        .to_string()
}

pub fn build_prompt(raw_query: &str) -> String {
    let query = sanitize_for_prompt(raw_query);
    format!(
        "You are a GitHub repository search assistant. Convert the user's description \
         of a software tool into 3 to 5 search keywords separated by single spaces. \
         Use programming languages, frameworks, tools and technical concepts.\n\n\
         User request: \"{query}\"\n\n\
         Respond with ONLY the keywords on one line, in English. \
         No explanation, no punctuation, no numbering.\n\
         Example: fetch axios HTTP client curl"
    )
}

/// Reduce model output to a single line of space-separated keywords.
pub fn parse_keywords(content: &str) -> Result<String, KeywordError> {
    let line = content
        .lines()
        .map(|l| l.trim())
        .find(|l| !l.is_empty() && !l.starts_with("```"))
        .unwrap_or_default();

    let cleaned: String = line
        .chars()
        .map(|c| if c == ',' { ' ' } else { c })
        .filter(|c| *c != '`' && *c != '"' && *c != '\'')
        .collect();
    let keywords = cleaned.split_whitespace().collect::<Vec<_>>().join(" ");

    if keywords.chars().count() < MIN_KEYWORD_CHARS {
        return Err(KeywordError::EmptyKeywords(content.to_string()));
    }
    Ok(keywords)
}

// ─── Gemini ──────────────────────────────────────────────

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

/// Pull `candidates[0].content.parts[0].text` out of a response body.
fn extract_text(body: &str) -> Result<String, KeywordError> {
    let resp: GenerateContentResponse = serde_json::from_str(body)
        .map_err(|e| KeywordError::MalformedResponse(format!("invalid JSON: {e}")))?;

    resp.candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or_else(|| {
            KeywordError::MalformedResponse("missing candidates[0].content.parts[0].text".into())
        })
}

/// Error text is logged, so it never carries the request URL.
fn transport_error(e: reqwest::Error, timeout: Duration) -> KeywordError {
    if e.is_timeout() {
        KeywordError::Timeout(timeout.as_secs())
    } else {
        KeywordError::Transport(e.without_url().to_string())
    }
}

/// Keyword generator backed by the Gemini `generateContent` API.
pub struct GeminiClient {
    client: reqwest::Client,
    config: LlmConfig,
}

impl GeminiClient {
    pub fn new(client: reqwest::Client, config: LlmConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl KeywordGenerator for GeminiClient {
    async fn generate(&self, raw_query: &str) -> Result<String, KeywordError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(KeywordError::NotConfigured)?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );

        let req = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: Some(build_prompt(raw_query)),
                }],
            }],
        };

        let timeout = self.config.timeout();
        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", api_key)
            .timeout(timeout)
            .json(&req)
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(KeywordError::RateLimited(body));
        }
        if !status.is_success() {
            return Err(KeywordError::Status {
                status: status.as_u16(),
                body,
            });
        }

        parse_keywords(&extract_text(&body)?)
    }
}

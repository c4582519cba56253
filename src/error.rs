use thiserror::Error;

/// Failure of a single keyword-generation attempt.
#[derive(Debug, Error)]
pub enum KeywordError {
    #[error("keyword generation is not configured (GEMINI_API_KEY unset)")]
    NotConfigured,

    #[error("Gemini API did not respond within {0} seconds")]
    Timeout(u64),

    #[error("Gemini API rate limit exceeded (429): {0}")]
    RateLimited(String),

    #[error("Gemini API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to call Gemini API: {0}")]
    Transport(String),

    #[error("Malformed Gemini response: {0}")]
    MalformedResponse(String),

    #[error("Gemini returned no usable keywords: {0:?}")]
    EmptyKeywords(String),
}

impl KeywordError {
    /// Whether another attempt could succeed. Every upstream failure is
    /// eligible; only a missing configuration is not.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, KeywordError::NotConfigured)
    }
}

/// Terminal failure of the repository search step.
#[derive(Debug, Error)]
pub enum SearchServiceError {
    #[error("GitHub API returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to call GitHub search API: {0}")]
    Transport(String),

    #[error("Failed to parse GitHub search response: {0}")]
    Decode(String),
}

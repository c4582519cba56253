use serde::Serialize;

pub const DEFAULT_DESCRIPTION: &str = "No description available";
pub const DEFAULT_LANGUAGE: &str = "Unknown";

/// A normalized repository search hit. Every field is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryRecord {
    pub id: u64,
    pub name: String,
    pub full_name: String,
    pub description: String,
    pub url: String,
    pub star_count: u64,
    pub primary_language: String,
    pub topics: Vec<String>,
}

/// Keyword text actually sent to the repository search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKeywords {
    pub text: String,
    pub is_fallback: bool,
}

impl ResolvedKeywords {
    pub fn generated(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_fallback: false,
        }
    }

    pub fn fallback(raw_query: impl Into<String>) -> Self {
        Self {
            text: raw_query.into(),
            is_fallback: true,
        }
    }
}

/// Search response
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    pub repositories: Vec<RepositoryRecord>,
    pub keywords: String,
    pub is_fallback: bool,
    pub original_query: String,
}

impl SearchResult {
    /// Result for a blank query: nothing searched, nothing found.
    pub fn empty() -> Self {
        Self {
            repositories: Vec::new(),
            keywords: String::new(),
            is_fallback: false,
            original_query: String::new(),
        }
    }
}

/// Body of a 500 response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub message: String,
}

use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    /// Server bind address
    pub bind_addr: String,
    /// Query used when `/search` is called without `q`
    pub default_query: String,
    /// Generative-text service configuration
    pub llm: LlmConfig,
    /// Repository search service configuration
    pub github: GitHubConfig,
    /// Retry policy for keyword generation
    pub retry: RetryConfig,
}

/// Configuration for the Gemini `generateContent` API.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Base URL for the Gemini API
    pub base_url: String,
    /// Model name used for keyword generation
    pub model: String,
    /// API key. If None, keyword generation is disabled and every search
    /// uses the raw query.
    pub api_key: Option<String>,
    /// Per-attempt request timeout in seconds (1..=30).
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct GitHubConfig {
    /// Base URL for the GitHub REST API
    pub api_url: String,
    /// Personal access token, raises the search rate limit when set
    pub token: Option<String>,
    /// Results per page (1..=100)
    pub per_page: u32,
}

#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Total attempts, including the first one
    pub max_attempts: u32,
    /// Fixed delay between attempts in milliseconds
    pub delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            default_query: "awesome".to_string(),
            llm: LlmConfig::default(),
            github: GitHubConfig::default(),
            retry: RetryConfig::default(),
        }
    }
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            timeout_secs: 8,
        }
    }
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.github.com".to_string(),
            token: None,
            per_page: 30,
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 2_000,
        }
    }
}

impl LlmConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.clamp(1, 30))
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source. Unparseable values
    /// keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(addr) = lookup("GITMAP_BIND_ADDR") {
            config.bind_addr = addr;
        }
        if let Some(q) = lookup("DEFAULT_QUERY") {
            if !q.trim().is_empty() {
                config.default_query = q;
            }
        }

        // Gemini
        if let Some(key) = lookup("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                config.llm.api_key = Some(key);
            }
        }
        if let Some(url) = lookup("GEMINI_BASE_URL") {
            config.llm.base_url = url;
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            config.llm.model = model;
        }
        if let Some(val) = lookup("GEMINI_TIMEOUT_SECS") {
            if let Ok(v) = val.parse::<u64>() {
                config.llm.timeout_secs = v.clamp(1, 30);
            }
        }

        // GitHub
        if let Some(token) = lookup("GITHUB_TOKEN") {
            if !token.trim().is_empty() {
                config.github.token = Some(token);
            }
        }
        if let Some(url) = lookup("GITHUB_API_URL") {
            config.github.api_url = url;
        }
        if let Some(val) = lookup("GITHUB_PER_PAGE") {
            if let Ok(v) = val.parse::<u32>() {
                config.github.per_page = v.clamp(1, 100);
            }
        }

        // Retry
        if let Some(val) = lookup("KEYWORD_MAX_ATTEMPTS") {
            if let Ok(v) = val.parse::<u32>() {
                config.retry.max_attempts = v.max(1);
            }
        }
        if let Some(val) = lookup("KEYWORD_RETRY_DELAY_MS") {
            if let Ok(v) = val.parse() {
                config.retry.delay_ms = v;
            }
        }

        config
    }
}

//! # gitmap
//!
//! Describe the tool you need in plain words and get matching GitHub
//! repositories. The query is rewritten into search keywords by Gemini
//! when possible, then sent to the GitHub repository search.
//!
//! ## Pipeline
//!
//! ```text
//!              ┌──────────────┐
//!              │  User Query  │
//!              └──────┬───────┘
//!                     │ trim; blank → empty result
//!                     ▼
//!         ┌───────────────────────┐
//!         │   Keyword Resolver    │
//!         │  Gemini, 8s timeout   │
//!         │  3 attempts, 2s apart │
//!         └───────────┬───────────┘
//!        ok │                    │ error
//!           ▼                    ▼
//!   generated keywords    original query (fallback)
//!           └─────────┬──────────┘
//!                     ▼
//!         ┌───────────────────────┐
//!         │  GitHub Repo Search   │
//!         │  sort=stars, no retry │
//!         └───────────┬───────────┘
//!                     ▼
//!         ┌───────────────────────┐
//!         │ Normalized records +  │
//!         │ keywords, isFallback  │
//!         └───────────────────────┘
//! ```
//!
//! ## Module Overview
//!
//! - [`config`] - Environment-based configuration for the server, Gemini, GitHub and retries
//! - [`models`] - `RepositoryRecord`, `SearchResult` and request/response types
//! - [`error`] - Keyword-generation and repository-search error taxonomy
//! - [`retry`] - The fixed-delay retry policy applied around keyword generation
//! - [`llm::keywords`] - Prompt construction and single-shot Gemini keyword generation
//! - [`resolver`] - Keyword resolution with the retry policy applied
//! - [`search::github`] - GitHub repository search and record normalization
//! - [`search::service`] - The search operation: resolve, fall back, search
//! - [`api`] - Axum router and the `GET /search` handler
//! - [`state`] - Shared application state wiring the pipeline together

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod resolver;
pub mod retry;
pub mod search;
pub mod state;

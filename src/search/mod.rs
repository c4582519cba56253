pub mod github;
pub mod service;

use crate::env::{first_nonempty, optional};

/// GitHub REST API base URL (fixed).
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// GitHub analytics integration settings.
///
/// The target is the user or organization whose activity the backend
/// reports on; the token is optional and only raises the rate limit.
#[derive(Clone, Debug)]
pub struct GithubConfig {
    pub api_url: String,
    pub token: Option<String>,
    /// "user" or "organization"
    pub target_type: String,
    pub target_name: String,
}

impl GithubConfig {
    pub fn from_env() -> Self {
        Self::from_source(&|key| std::env::var(key).ok())
    }

    pub fn from_source<F>(source: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            api_url: GITHUB_API_URL.to_string(),
            token: optional(source, "GITHUB_TOKEN"),
            target_type: first_nonempty(source, &["GITHUB_TARGET_TYPE"], "user"),
            target_name: first_nonempty(source, &["GITHUB_TARGET_NAME"], "open-coding-society"),
        }
    }
}

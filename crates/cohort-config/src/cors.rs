/// Origins permitted to make credentialed cross-origin requests.
///
/// These are the GitHub Pages deployments of the frontend plus the local
/// ports the pages are served from during development.
pub const ALLOWED_ORIGINS: [&str; 8] = [
    "http://localhost:4500",
    "http://127.0.0.1:4500",
    "http://localhost:4600", // open-coding-society.github.io served locally
    "http://127.0.0.1:4600",
    "http://localhost:4000", // pages served locally
    "http://127.0.0.1:4000",
    "https://open-coding-society.github.io",
    "https://pages.opencodingsociety.com",
];

#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    /// The allow-list is fixed; it is not environment-driven.
    pub fn new() -> Self {
        Self {
            allowed_origins: ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::new()
    }
}

//! # Cohort Config
//!
//! Configuration types for the Cohort API.
//!
//! This crate provides configuration structures resolved once at startup,
//! mostly from environment variables:
//!
//! - [`accounts`]: seed credentials for the admin and default user
//! - [`session`]: secret key and cookie/token names
//! - [`database`]: connection-string selection (MySQL vs. local SQLite)
//! - [`cors`]: CORS (Cross-Origin Resource Sharing) allow-list
//! - [`uploads`]: image upload constraints and directory
//! - [`github`], [`kasm`], [`groq`]: external service credentials
//!
//! Every value falls back through an ordered chain ending in a literal
//! default, so a constructed [`AppConfig`] never has an unresolved field.
//! The struct is built once in `main` and handed out read-only from there.
//!
//! # Example
//!
//! ```ignore
//! use cohort_config::AppConfig;
//!
//! let config = AppConfig::from_env();
//! println!("database: {}", config.database.url);
//! ```

pub mod accounts;
pub mod cors;
pub mod database;
pub mod env;
pub mod github;
pub mod groq;
pub mod kasm;
pub mod session;
pub mod uploads;

// Re-export commonly used types at crate root
pub use accounts::AccountsConfig;
pub use cors::CorsConfig;
pub use database::DatabaseConfig;
pub use github::GithubConfig;
pub use groq::GroqConfig;
pub use kasm::KasmConfig;
pub use session::SessionConfig;
pub use uploads::UploadConfig;

/// The full application configuration, resolved once at process start.
///
/// Construct with [`AppConfig::from_env`] in `main`, wrap in an `Arc`, and
/// share through the application state. Nothing mutates it afterwards.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub accounts: AccountsConfig,
    pub session: SessionConfig,
    pub database: DatabaseConfig,
    pub cors: CorsConfig,
    pub uploads: UploadConfig,
    pub github: GithubConfig,
    pub kasm: KasmConfig,
    pub groq: GroqConfig,
}

impl AppConfig {
    /// Resolves the configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_source(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration from an arbitrary lookup source.
    ///
    /// Tests pass a closure over a map instead of mutating the process
    /// environment, which is not safe across parallel test threads.
    pub fn from_source<F>(source: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            accounts: AccountsConfig::from_source(&source),
            session: SessionConfig::from_source(&source),
            database: DatabaseConfig::from_source(&source),
            cors: CorsConfig::new(),
            uploads: UploadConfig::new(),
            github: GithubConfig::from_source(&source),
            kasm: KasmConfig::from_source(&source),
            groq: GroqConfig::from_source(&source),
        }
    }
}

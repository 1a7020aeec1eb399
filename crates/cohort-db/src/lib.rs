//! # Cohort DB
//!
//! Database pool and migrations for the Cohort API.
//!
//! The backend talks to managed MySQL in production and a local SQLite file
//! in development; the dialect is decided by the resolved
//! [`DatabaseConfig`], so the pool uses sqlx's `Any` driver and follows the
//! connection URL wherever it points.
//!
//! # Example
//!
//! ```ignore
//! use cohort_config::DatabaseConfig;
//! use cohort_db::{init_db_pool, run_migrations};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = DatabaseConfig::from_env();
//!     let pool = init_db_pool(&config).await;
//!     run_migrations(&pool).await;
//! }
//! ```

use cohort_config::DatabaseConfig;
use sqlx::AnyPool;
use sqlx::migrate::Migrator;
use tracing::info;

/// Embedded migrations, applied at startup.
pub static MIGRATOR: Migrator = sqlx::migrate!();

/// Initializes the database connection pool.
///
/// Should be called once during application startup; the returned pool is
/// cheaply cloneable and lives in the application state.
///
/// # Panics
///
/// Panics if the connection cannot be established. There is nothing useful
/// the server can do without its database, so startup fails loudly.
pub async fn init_db_pool(config: &DatabaseConfig) -> AnyPool {
    sqlx::any::install_default_drivers();

    let url = connect_url(config);
    let pool = AnyPool::connect(&url)
        .await
        .expect("Failed to connect to database");

    info!(database = %config.name, sqlite = config.is_sqlite(), "Database pool ready");
    pool
}

/// Applies any pending migrations.
///
/// # Panics
///
/// Panics if a migration fails; a half-migrated schema must not serve.
pub async fn run_migrations(pool: &AnyPool) {
    MIGRATOR
        .run(pool)
        .await
        .expect("Failed to run database migrations");
}

/// The URL actually handed to the driver. SQLite needs `mode=rwc` so the
/// database file is created on first run.
fn connect_url(config: &DatabaseConfig) -> String {
    if config.is_sqlite() && !config.url.contains('?') {
        format!("{}?mode=rwc", config.url)
    } else {
        config.url.clone()
    }
}

// Re-export AnyPool for convenience
pub use sqlx::AnyPool as DbPool;

use std::sync::Arc;

use cohort_config::AppConfig;
use cohort_db::{DbPool, init_db_pool, run_migrations};

/// Shared application state: the connection pool and the read-only
/// configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: DbPool,
    pub config: Arc<AppConfig>,
}

/// Resolves configuration, prepares local directories, connects the pool,
/// and applies migrations.
///
/// # Panics
///
/// Panics if local directories cannot be created or the database is
/// unreachable; there is no degraded mode to fall back to at startup.
pub async fn init_app_state() -> AppState {
    let config = Arc::new(AppConfig::from_env());

    config
        .uploads
        .ensure_upload_dir()
        .expect("Failed to create upload directory");

    // The SQLite files live under volumes/; the driver creates the file but
    // not its parent directory.
    if config.database.is_sqlite() {
        std::fs::create_dir_all(cohort_config::database::VOLUMES_DIR)
            .expect("Failed to create volumes directory");
    }

    let db = init_db_pool(&config.database).await;
    run_migrations(&db).await;

    AppState { db, config }
}

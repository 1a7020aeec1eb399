//! # Cohort API
//!
//! Bootstrap and configuration layer for a user-management backend built
//! with Rust, Axum, and SQLx.
//!
//! ## Overview
//!
//! The process does its interesting work at startup:
//!
//! 1. Load `.env` and resolve the full [`config::AppConfig`] from the
//!    environment, falling back to literal defaults.
//! 2. Prepare local state: the `instance/uploads` directory and, when the
//!    SQLite fallback is active, the `volumes/` directory.
//! 3. Connect the database pool (MySQL in production, SQLite locally) and
//!    apply migrations.
//! 4. Serve a router carrying the CORS allow-list, the upload body-size
//!    limit, and request logging.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── cohort-config/    # Configuration types (env resolution, CORS, DB URLs)
//! └── cohort-db/        # AnyPool initialization and embedded migrations
//! src/
//! ├── logging.rs        # Request logging middleware
//! ├── modules/          # Feature modules (health only; the rest of the
//! │                     # application is out of scope here)
//! ├── router.rs         # Main application router and layers
//! └── state.rs          # Shared application state
//! ```
//!
//! ## Environment Variables
//!
//! ```bash
//! # Production database; any of the three missing selects local SQLite
//! DB_ENDPOINT=db.example.com
//! DB_USERNAME=cohort
//! DB_PASSWORD=secret
//!
//! # Bootstrap accounts
//! ADMIN_USER="Admin Name"
//! ADMIN_UID=admin
//! ADMIN_PASSWORD=changeme
//! DEFAULT_PASSWORD=password
//!
//! # Sessions
//! SECRET_KEY=change-in-production
//!
//! # Integrations
//! GITHUB_TOKEN=ghp_...
//! KASM_API_KEY=...
//! GROQ_API_KEY=...
//! ```

pub mod logging;
pub mod modules;
pub mod router;
pub mod state;

// Re-export workspace crates for convenience
pub use cohort_config as config;
pub use cohort_db as db;

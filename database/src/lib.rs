//! MySQL side of the Goodbooks dashboard.
//!
//! The relational catalog (`books` and `ratings` tables) is read through the
//! [`BookCatalog`] trait. [`Database`] owns the sqlx pool.

pub mod errors;
pub mod queries;
pub mod repositories;

// Re-export commonly used items
pub use sqlx;

pub use errors::{CatalogError, CatalogResult};
pub use repositories::{like_pattern, BookCatalog, CatalogRepository};

use goodbooks_config::MySqlConfig;
use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

/// Database connection manager
#[derive(Debug, Clone)]
pub struct Database {
    pool: MySqlPool,
}

impl Database {
    /// Build a pool that opens connections on first use.
    ///
    /// Only a malformed URL fails here. An unreachable server surfaces on the
    /// first query instead, so the dashboard still starts without MySQL.
    pub fn connect_lazy(config: &MySqlConfig) -> CatalogResult<Self> {
        tracing::info!("🐬 Configuring MySQL pool for {}", config.redacted());

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(10))
            .connect_lazy(&config.connection_url())?;

        Ok(Self { pool })
    }

    /// Get the underlying connection pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    pub fn catalog(&self) -> CatalogRepository {
        CatalogRepository::new(self.pool.clone())
    }
}

//! Lazily-connected handle to the catalog database.

use std::str::FromStr;
use std::time::Duration;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tokio::sync::OnceCell;

use cloudtunes_core::constants::CATALOG_DATABASE;
use cloudtunes_core::AppError;

/// Embedded migrations, applied when the pool is first created.
static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("../../migrations");

/// Connection handle for the song catalog database.
///
/// The pool is created on first use rather than at startup: when
/// `COSMOS_DB_CONNECTION_STRING` is absent the server still boots and serves
/// 500s for catalog routes. Concurrent first requests race on the cell and
/// exactly one of them connects.
pub struct CatalogDb {
    conn_string: Option<String>,
    max_connections: u32,
    acquire_timeout: Duration,
    pool: OnceCell<PgPool>,
}

impl CatalogDb {
    pub fn new(conn_string: Option<String>, max_connections: u32, timeout_seconds: u64) -> Self {
        Self {
            conn_string,
            max_connections,
            acquire_timeout: Duration::from_secs(timeout_seconds),
            pool: OnceCell::new(),
        }
    }

    /// Get the connection pool, connecting and migrating on first call.
    /// A failed attempt leaves the cell empty, so the next request retries.
    pub async fn pool(&self) -> Result<&PgPool, AppError> {
        self.pool
            .get_or_try_init(|| async {
                let conn = self.conn_string.as_deref().ok_or_else(|| {
                    AppError::Database(sqlx::Error::Configuration(
                        "COSMOS_DB_CONNECTION_STRING not set".into(),
                    ))
                })?;
                self.connect(conn).await
            })
            .await
    }

    async fn connect(&self, conn: &str) -> Result<PgPool, AppError> {
        // The catalog database name is fixed; whatever database the connection
        // string names is overridden.
        let options = PgConnectOptions::from_str(conn)?.database(CATALOG_DATABASE);

        let pool = PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect_with(options)
            .await?;

        MIGRATOR.run(&pool).await.map_err(sqlx::Error::from)?;

        tracing::info!(database = CATALOG_DATABASE, "Catalog database connected");
        Ok(pool)
    }
}

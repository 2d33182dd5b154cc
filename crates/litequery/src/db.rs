//! Execution facade owning the live database connection.

use crate::config::ConnectConfig;
use crate::error::{QueryError, QueryResult};
use crate::syntax::Table;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tokio_postgres::{Client, NoTls};

/// The connection context.
///
/// Created once at startup and passed (cheaply cloned, shared ownership) into
/// every component that issues SQL. The connection is established exactly once
/// via [`Db::connect`]; statements issued before that fail fast with
/// [`QueryError::NotConnected`]. [`Db::table`] only builds statement nodes and
/// is usable in any state.
///
/// # Example
/// ```ignore
/// let db = Db::new();
/// db.connect(&config).await?;
/// let users = db.table("users").select().execute().await?;
/// ```
#[derive(Clone, Default)]
pub struct Db {
    inner: Arc<DbInner>,
}

#[derive(Default)]
struct DbInner {
    client: OnceLock<Client>,
}

impl Db {
    /// Create an unconnected context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Establish the connection.
    ///
    /// One-shot and irreversible for the lifetime of this context: a second
    /// call, and any failure to reach or authenticate to the server, surface
    /// as [`QueryError::Connection`]. Connection attempts are not retried.
    pub async fn connect(&self, config: &ConnectConfig) -> QueryResult<()> {
        if self.is_connected() {
            return Err(QueryError::connection("connection already established"));
        }
        if !config.driver_supported() {
            return Err(QueryError::connection(format!(
                "unsupported driver '{}'",
                config.driver
            )));
        }

        let (client, connection) = tokio_postgres::connect(&config.conn_string(), NoTls)
            .await
            .map_err(|e| QueryError::connection(e.to_string()))?;

        // The driver demultiplexes on its own task for the connection's lifetime.
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                tracing::error!(target: "litequery.db", error = %e, "connection task failed");
            }
        });

        if self.inner.client.set(client).is_err() {
            return Err(QueryError::connection("connection already established"));
        }
        tracing::info!(
            target: "litequery.db",
            host = %config.host,
            port = config.port,
            dbname = %config.dbname,
            "database connection established"
        );
        Ok(())
    }

    /// Whether [`Db::connect`] has succeeded on this context.
    pub fn is_connected(&self) -> bool {
        self.inner.client.get().is_some()
    }

    fn client(&self) -> QueryResult<&Client> {
        self.inner.client.get().ok_or(QueryError::NotConnected)
    }

    /// Run arbitrary SQL text and return the raw result rows.
    pub async fn query(&self, sql: &str) -> QueryResult<Vec<tokio_postgres::Row>> {
        let client = self.client()?;
        tracing::debug!(target: "litequery.sql", sql, "query");
        client.query(sql, &[]).await.map_err(QueryError::from)
    }

    /// Run arbitrary SQL text and return the affected-row count.
    pub async fn execute(&self, sql: &str) -> QueryResult<u64> {
        let client = self.client()?;
        tracing::debug!(target: "litequery.sql", sql, "execute");
        client.execute(sql, &[]).await.map_err(QueryError::from)
    }

    /// Entry point for statement construction: a [`Table`] node factory.
    pub fn table(&self, name: impl Into<String>) -> Table {
        Table::new(self.clone(), name)
    }
}

impl fmt::Debug for Db {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Db")
            .field("connected", &self.is_connected())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_query_before_connect_fails_fast() {
        let db = Db::new();
        let err = db.query("SELECT 1;").await.unwrap_err();
        assert!(err.is_not_connected());

        let err = db.execute("DELETE FROM t;").await.unwrap_err();
        assert!(err.is_not_connected());
    }

    #[tokio::test]
    async fn test_unsupported_driver_is_a_connection_error() {
        let db = Db::new();
        let config = ConnectConfig::new()
            .driver("mysql")
            .dbname("app")
            .username("svc");
        let err = db.connect(&config).await.unwrap_err();
        assert!(err.is_connection());
    }

    #[test]
    fn test_table_is_available_unconnected() {
        let db = Db::new();
        assert_eq!(db.table("users").name(), "users");
        assert!(!db.is_connected());
    }
}

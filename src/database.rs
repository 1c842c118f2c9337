//! # PostgreSQL catalog access
//!
//! A single `tokio-postgres` client opened once per inspection run. Every
//! query is a read-only statement in autocommit mode; nothing is pooled.

use crate::inspect::{Catalog, SampleRow};
use thiserror::Error;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, error, info};

/// Database-related errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Could not open the connection
    #[error("Connection failed: {0}")]
    Connect(#[source] tokio_postgres::Error),

    /// Database query error
    #[error("Database query error: {0}")]
    Query(#[from] tokio_postgres::Error),

    /// A sample row did not decode as a JSON object
    #[error("Invalid sample row: {0}")]
    Decode(#[from] serde_json::Error),
}

const LIST_TABLES_SQL: &str = "SELECT table_name::text FROM information_schema.tables \
     WHERE table_schema = current_schema() AND table_type = 'BASE TABLE' \
     ORDER BY table_name";

/// Quote a catalog-provided name for interpolation into SQL text
#[must_use]
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Catalog backed by a live PostgreSQL connection
pub struct PgCatalog {
    client: Client,
}

impl PgCatalog {
    /// Open a connection (single attempt, no timeout)
    pub async fn connect(database_url: &str) -> Result<Self, DatabaseError> {
        info!("Opening database connection");
        let (client, connection) = tokio_postgres::connect(database_url, NoTls)
            .await
            .map_err(|e| {
                error!("Failed to connect: {}", e);
                DatabaseError::Connect(e)
            })?;

        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("Database connection error: {}", e);
            }
        });

        Ok(Self { client })
    }
}

impl Catalog for PgCatalog {
    async fn list_tables(&self) -> Result<Vec<String>, DatabaseError> {
        let rows = self.client.query(LIST_TABLES_SQL, &[]).await?;
        let tables = rows
            .iter()
            .map(|row| row.try_get::<_, String>(0))
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Catalog lists {} tables", tables.len());
        Ok(tables)
    }

    async fn row_count(&self, table: &str) -> Result<i64, DatabaseError> {
        let sql = format!("SELECT count(*) FROM {}", quote_ident(table));
        let row = self.client.query_one(sql.as_str(), &[]).await?;
        Ok(row.try_get(0)?)
    }

    async fn sample_rows(&self, table: &str, limit: u32) -> Result<Vec<SampleRow>, DatabaseError> {
        let sql = format!(
            "SELECT row_to_json(t)::text FROM (SELECT * FROM {} LIMIT $1) AS t",
            quote_ident(table)
        );
        let limit = i64::from(limit);
        let rows = self.client.query(sql.as_str(), &[&limit]).await?;
        rows.iter()
            .map(|row| -> Result<SampleRow, DatabaseError> {
                let text: String = row.try_get(0)?;
                Ok(serde_json::from_str(&text)?)
            })
            .collect()
    }
}

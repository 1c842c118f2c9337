//! # Table inspection
//!
//! Walks the tables a [`Catalog`] reports and prints a row count and a few
//! sample rows for each. Per-table failures are recorded inline and the run
//! moves on; only a failed listing aborts.

use crate::database::DatabaseError;
use crate::error::{EnvKitError, Result};
use serde_json::{Map, Value};
use std::io::Write;
use tracing::{debug, warn};

/// Sample rows printed per table, whatever the driver returned
pub const DISPLAY_ROWS: usize = 3;

/// One sampled row: column name to value, in column order
pub type SampleRow = Map<String, Value>;

/// Read-only view of a database catalog
#[allow(async_fn_in_trait)]
pub trait Catalog {
    /// Table names in listing order
    async fn list_tables(&self) -> std::result::Result<Vec<String>, DatabaseError>;

    /// `SELECT count(*)` of a table
    async fn row_count(&self, table: &str) -> std::result::Result<i64, DatabaseError>;

    /// At most `limit` rows of a table
    async fn sample_rows(
        &self,
        table: &str,
        limit: u32,
    ) -> std::result::Result<Vec<SampleRow>, DatabaseError>;
}

/// What an inspection run learned about one table
#[derive(Debug, Clone, PartialEq)]
pub struct TableSummary {
    /// Table name
    pub name: String,
    /// Row count, or the error message of the failed count
    pub row_count: std::result::Result<i64, String>,
    /// Sampled rows, or the error message of the failed sample
    pub samples: std::result::Result<Vec<SampleRow>, String>,
}

impl TableSummary {
    /// Row count as printed: the number or `error: ...`
    #[must_use]
    pub fn count_display(&self) -> String {
        match &self.row_count {
            Ok(count) => count.to_string(),
            Err(e) => format!("error: {e}"),
        }
    }

    fn write<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "- {}: {} rows", self.name, self.count_display())?;
        match &self.samples {
            Ok(rows) if rows.is_empty() => {}
            Ok(rows) => {
                writeln!(out, "  sample row:")?;
                for row in rows.iter().take(DISPLAY_ROWS) {
                    writeln!(out, "    {}", Value::Object(row.clone()))?;
                }
            }
            Err(e) => writeln!(out, "  failed to sample rows: {e}")?,
        }
        Ok(())
    }
}

/// List tables and write a summary of each to `out` as it is gathered.
///
/// Fails only when the listing itself fails.
pub async fn inspect_tables<C: Catalog, W: Write>(
    catalog: &C,
    sample: u32,
    out: &mut W,
) -> Result<Vec<TableSummary>> {
    let tables = catalog
        .list_tables()
        .await
        .map_err(|source| EnvKitError::ListTables { source })?;

    if tables.is_empty() {
        writeln!(out, "No tables found.")?;
        return Ok(Vec::new());
    }

    writeln!(out, "Found tables:")?;
    let mut summaries = Vec::with_capacity(tables.len());
    for name in tables {
        let row_count = catalog.row_count(&name).await.map_err(|e| {
            warn!("Count failed for {}: {}", name, e);
            e.to_string()
        });
        let samples = catalog.sample_rows(&name, sample).await.map_err(|e| {
            warn!("Sample failed for {}: {}", name, e);
            e.to_string()
        });
        debug!("Summarized table {}", name);

        let summary = TableSummary {
            name,
            row_count,
            samples,
        };
        summary.write(out)?;
        summaries.push(summary);
    }
    Ok(summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct FakeCatalog {
        tables: Vec<String>,
        counts: HashMap<String, i64>,
        rows: HashMap<String, Vec<SampleRow>>,
        fail_listing: bool,
        limits: RefCell<Vec<u32>>,
    }

    fn query_error() -> DatabaseError {
        DatabaseError::Decode(serde_json::from_str::<Value>("{").unwrap_err())
    }

    fn row(id: i64) -> SampleRow {
        json!({ "id": id, "name": format!("n{id}") })
            .as_object()
            .unwrap()
            .clone()
    }

    impl Catalog for FakeCatalog {
        async fn list_tables(&self) -> std::result::Result<Vec<String>, DatabaseError> {
            if self.fail_listing {
                return Err(query_error());
            }
            Ok(self.tables.clone())
        }

        async fn row_count(&self, table: &str) -> std::result::Result<i64, DatabaseError> {
            self.counts.get(table).copied().ok_or_else(query_error)
        }

        async fn sample_rows(
            &self,
            table: &str,
            limit: u32,
        ) -> std::result::Result<Vec<SampleRow>, DatabaseError> {
            self.limits.borrow_mut().push(limit);
            self.rows.get(table).cloned().ok_or_else(query_error)
        }
    }

    async fn run(catalog: &FakeCatalog, sample: u32) -> (Result<Vec<TableSummary>>, String) {
        let mut out = Vec::new();
        let result = inspect_tables(catalog, sample, &mut out).await;
        (result, String::from_utf8(out).unwrap())
    }

    #[tokio::test]
    async fn test_zero_tables() {
        let catalog = FakeCatalog::default();
        let (result, text) = run(&catalog, 5).await;
        assert!(result.unwrap().is_empty());
        assert_eq!(text, "No tables found.\n");
    }

    #[tokio::test]
    async fn test_listing_failure_is_fatal() {
        let catalog = FakeCatalog {
            fail_listing: true,
            ..Default::default()
        };
        let (result, _) = run(&catalog, 5).await;
        assert!(matches!(result, Err(EnvKitError::ListTables { .. })));
    }

    #[tokio::test]
    async fn test_count_failure_continues_to_next_table() {
        let catalog = FakeCatalog {
            tables: vec!["broken".to_string(), "users".to_string()],
            counts: HashMap::from([("users".to_string(), 2)]),
            rows: HashMap::from([
                ("broken".to_string(), Vec::new()),
                ("users".to_string(), vec![row(1), row(2)]),
            ]),
            ..Default::default()
        };

        let (result, text) = run(&catalog, 5).await;
        let summaries = result.unwrap();
        assert_eq!(summaries.len(), 2);
        assert!(summaries[0].row_count.is_err());
        assert!(text.contains(&format!("- broken: error: {} rows\n", query_error())));
        assert!(text.contains("- users: 2 rows"));
        assert!(text.contains("    {\"id\":1,\"name\":\"n1\"}"));
    }

    #[tokio::test]
    async fn test_sample_failure_is_reported_inline() {
        let catalog = FakeCatalog {
            tables: vec!["a".to_string(), "b".to_string()],
            counts: HashMap::from([("a".to_string(), 0), ("b".to_string(), 0)]),
            rows: HashMap::from([("b".to_string(), Vec::new())]),
            ..Default::default()
        };

        let (result, text) = run(&catalog, 5).await;
        assert_eq!(result.unwrap().len(), 2);
        assert!(text.contains("- a: 0 rows\n  failed to sample rows:"));
        assert!(text.ends_with("- b: 0 rows\n"));
    }

    #[tokio::test]
    async fn test_empty_sample_prints_only_count_line() {
        let catalog = FakeCatalog {
            tables: vec!["empty".to_string()],
            counts: HashMap::from([("empty".to_string(), 0)]),
            rows: HashMap::from([("empty".to_string(), Vec::new())]),
            ..Default::default()
        };

        let (result, text) = run(&catalog, 5).await;
        assert_eq!(result.unwrap()[0].samples, Ok(Vec::new()));
        assert_eq!(text, "Found tables:\n- empty: 0 rows\n");
    }

    #[tokio::test]
    async fn test_sample_zero_requests_no_rows() {
        let catalog = FakeCatalog {
            tables: vec!["t".to_string()],
            counts: HashMap::from([("t".to_string(), 4)]),
            rows: HashMap::from([("t".to_string(), Vec::new())]),
            ..Default::default()
        };

        let (result, text) = run(&catalog, 0).await;
        assert!(result.is_ok());
        assert_eq!(*catalog.limits.borrow(), vec![0]);
        assert!(!text.contains("sample row:"));
    }

    #[tokio::test]
    async fn test_sample_limit_passed_through_and_display_capped() {
        let catalog = FakeCatalog {
            tables: vec!["t".to_string()],
            counts: HashMap::from([("t".to_string(), 10)]),
            rows: HashMap::from([("t".to_string(), (1..=5).map(row).collect())]),
            ..Default::default()
        };

        let (result, text) = run(&catalog, 2).await;
        assert_eq!(*catalog.limits.borrow(), vec![2]);
        assert_eq!(result.unwrap()[0].samples.as_ref().unwrap().len(), 5);
        assert_eq!(text.matches("    {").count(), DISPLAY_ROWS);
    }
}

//! SQLite storage handle
//!
//! Every repository call opens its own connection through [`Database::connect`]
//! and drops it when the call returns. Nothing is pooled or shared between
//! requests.

use std::path::Path;

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;

use crate::Result;

const SCHEMA: &str = include_str!("schema.sql");

/// Connection factory for the review store
#[derive(Debug, Clone)]
pub struct Database {
    options: SqliteConnectOptions,
}

impl Database {
    /// Wrap connect options, creating the parent directory of the store file
    /// if it does not exist yet.
    pub fn new(options: SqliteConnectOptions) -> Result<Self> {
        if let Some(parent) = options.get_filename().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(Self { options })
    }

    /// Open a store file with default options (foreign keys on).
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let options = SqliteConnectOptions::new()
            .filename(path.as_ref())
            .create_if_missing(true);
        Self::new(options)
    }

    pub fn path(&self) -> &Path {
        self.options.get_filename()
    }

    /// Open a fresh connection scoped to the caller.
    pub async fn connect(&self) -> Result<SqliteConnection> {
        let conn = SqliteConnection::connect_with(&self.options).await?;
        Ok(conn)
    }

    /// Create any missing tables. Safe to call on every startup.
    pub async fn init_schema(&self) -> Result<()> {
        let mut conn = self.connect().await?;
        sqlx::raw_sql(SCHEMA).execute(&mut conn).await?;
        tracing::debug!(path = %self.path().display(), "Schema ready");
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::temp_database;
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init_schema_is_idempotent() {
        let (_temp_dir, db) = temp_database().await;
        db.init_schema().await.unwrap();

        let mut conn = db.connect().await.unwrap();
        let tables: Vec<String> = sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(&mut conn)
        .await
        .unwrap();

        assert_eq!(
            tables,
            vec!["Book", "BookCategory", "Category", "Review", "User"]
        );
    }

    #[tokio::test]
    async fn test_open_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/reviews.sqlite3");

        let db = Database::open(&path).unwrap();
        db.init_schema().await.unwrap();

        assert!(path.exists());
        assert!(db.path().ends_with("dir/reviews.sqlite3"));
    }
}

//! # Relational Store
//!
//! SQLite access through a sqlx connection pool. All statements are
//! parameterized; table names come from compile-time constants only.
//!
//! Uniqueness and referential integrity are left to the store's own
//! constraints. Failures come back as [`StoreError`] with constraint
//! violations already classified.

mod config;
mod errors;
pub mod schema;
mod students;
mod subjects;
mod teachers;

pub use config::DatabaseConfig;
pub use errors::{StoreError, StoreResult};
pub use students::{student_create, student_find_by_id, student_list};
pub use subjects::{subject_create, subject_find_by_id, subject_list};
pub use teachers::{teacher_create, teacher_find_by_id, teacher_list};

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::FromRow;

use crate::patch::{CompiledUpdate, SqlValue};

/// Handle to the connection pool. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Connect using the given configuration. Foreign keys are always on.
    pub async fn connect(config: &DatabaseConfig) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(&config.url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    /// Private in-memory database.
    ///
    /// An in-memory SQLite database lives as long as its connection, so the
    /// pool holds exactly one connection and never recycles it.
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the tables if they are missing.
    pub async fn bootstrap_schema(&self) -> StoreResult<()> {
        for statement in schema::BOOTSTRAP {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Round-trips a trivial query.
    pub async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Whether a row with `id` exists in `table`.
pub async fn exists(pool: &SqlitePool, table: &'static str, id: i64) -> StoreResult<bool> {
    let sql = format!("SELECT 1 FROM {table} WHERE id = ? LIMIT 1");
    let row = sqlx::query(&sql).bind(id).fetch_optional(pool).await?;
    Ok(row.is_some())
}

/// Deletes the row with `id`. Returns `false` when nothing was deleted.
pub async fn delete_by_id(pool: &SqlitePool, table: &'static str, id: i64) -> StoreResult<bool> {
    let sql = format!("DELETE FROM {table} WHERE id = ?");
    let res = sqlx::query(&sql).bind(id).execute(pool).await?;
    Ok(res.rows_affected() > 0)
}

/// Runs a compiled partial update and returns the updated row, or `None`
/// when no row matched the id.
pub async fn update_returning<T>(
    pool: &SqlitePool,
    update: CompiledUpdate,
    columns: &str,
) -> StoreResult<Option<T>>
where
    T: for<'r> FromRow<'r, SqliteRow> + Send + Unpin,
{
    let sql = update.sql_returning(columns);
    let mut query = sqlx::query_as::<_, T>(&sql);

    for value in update.into_params() {
        query = match value {
            SqlValue::Integer(v) => query.bind(v),
            SqlValue::Text(v) => query.bind(v),
            SqlValue::Bool(v) => query.bind(v),
            SqlValue::Null => query.bind(None::<String>),
        };
    }

    Ok(query.fetch_optional(pool).await?)
}

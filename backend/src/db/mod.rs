//! Data-access primitives
//!
//! Every route composes one of these helpers. Each call checks out a single
//! pooled connection for the duration of one statement and returns it to the
//! pool when the guard drops, on success and error paths alike. Statements
//! auto-commit; the only explicit transaction lives in the order service.

pub mod schema;

use std::time::Duration;

use sqlx::{
    postgres::{PgArguments, PgPoolOptions, PgRow},
    query::{Query, QueryAs, QueryScalar},
    Execute, FromRow, PgPool, Postgres,
};

use crate::config::DatabaseConfig;
use crate::error::AppResult;

/// Handle to the relational store
#[derive(Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    /// Build a pool without opening a connection.
    ///
    /// The server starts even when the database is down; operations fail
    /// (and are logged) until it becomes reachable.
    pub fn connect_lazy(config: &DatabaseConfig) -> AppResult<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_lazy(&config.url)?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Run a statement, returning the number of affected rows
    pub async fn try_execute<'q>(&self, query: Query<'q, Postgres, PgArguments>) -> AppResult<u64> {
        let mut conn = self.pool.acquire().await?;
        let result = query.execute(&mut *conn).await?;
        Ok(result.rows_affected())
    }

    /// Run a statement; failures are logged and swallowed
    pub async fn execute<'q>(&self, query: Query<'q, Postgres, PgArguments>) {
        let sql = query.sql();
        match self.try_execute(query).await {
            Ok(rows) => tracing::debug!(rows, "Statement executed"),
            Err(e) => tracing::error!(error = %e, sql = sql.trim(), "Statement failed"),
        }
    }

    /// Run a query and collect every row
    pub async fn try_fetch<'q, T>(&self, query: QueryAs<'q, Postgres, T, PgArguments>) -> AppResult<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut conn = self.pool.acquire().await?;
        let rows = query.fetch_all(&mut *conn).await?;
        Ok(rows)
    }

    /// Run a query and collect every row; failures yield an empty vector
    pub async fn fetch<'q, T>(&self, query: QueryAs<'q, Postgres, T, PgArguments>) -> Vec<T>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = query.sql();
        self.try_fetch(query).await.unwrap_or_else(|e| {
            tracing::error!(error = %e, sql = sql.trim(), "Query failed");
            Vec::new()
        })
    }

    /// Run a `COUNT(*)` query; failures are logged and returned
    pub async fn fetch_count<'q>(&self, query: QueryScalar<'q, Postgres, i64, PgArguments>) -> AppResult<i64> {
        let sql = query.sql();
        let result: AppResult<i64> = async {
            let mut conn = self.pool.acquire().await?;
            Ok(query.fetch_one(&mut *conn).await?)
        }
        .await;

        if let Err(e) = &result {
            tracing::error!(error = %e, sql = sql.trim(), "Count query failed");
        }
        result
    }

    /// Check connectivity with a trivial round trip
    pub async fn ping(&self) -> AppResult<()> {
        self.try_execute(sqlx::query("SELECT 1")).await.map(|_| ())
    }
}

pub mod entity;
pub mod migrations;
pub mod sea_orm_repo;

use std::str::FromStr;

use anyhow::{Context, Result};
use sea_orm::sqlx;
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sea_orm::{Database, DatabaseConnection, SqlxSqliteConnector};

/// Connect to the given DSN and apply connection-level settings.
///
/// SQLite's `LIKE` is ASCII-case-insensitive by default while substring
/// filters are case-sensitive, so every connection the pool opens gets
/// `PRAGMA case_sensitive_like` — the pool recycles idle connections, and a
/// pragma applied to just one of them would quietly disappear with it.
pub async fn connect(dsn: &str) -> Result<DatabaseConnection> {
    if !dsn.starts_with("sqlite:") {
        return Database::connect(dsn)
            .await
            .context("database connection failed");
    }

    let opts = SqliteConnectOptions::from_str(dsn).context("invalid sqlite DSN")?;
    let mut pool_opts = sqlite_pool_options();
    if dsn.contains(":memory:") || dsn.contains("mode=memory") {
        // An in-memory database lives and dies with its connection: keep
        // exactly one and never retire it.
        pool_opts = pool_opts
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None);
    }
    let pool = pool_opts
        .connect_with(opts)
        .await
        .context("database connection failed")?;
    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

fn sqlite_pool_options() -> SqlitePoolOptions {
    SqlitePoolOptions::new().after_connect(|conn, _meta| {
        Box::pin(async move {
            sqlx::query("PRAGMA case_sensitive_like = ON")
                .execute(&mut *conn)
                .await?;
            Ok(())
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn every_pooled_connection_gets_case_sensitive_like() {
        // Hold two connections at once so the pool has to open a second one;
        // both must have the pragma, not just whichever connected first.
        let pool = sqlite_pool_options()
            .max_connections(2)
            .min_connections(2)
            .connect_with(SqliteConnectOptions::from_str("sqlite::memory:").unwrap())
            .await
            .unwrap();

        let mut first = pool.acquire().await.unwrap();
        let mut second = pool.acquire().await.unwrap();
        for conn in [&mut first, &mut second] {
            let matched: bool = sqlx::query_scalar("SELECT 'ABC' LIKE '%abc%'")
                .fetch_one(&mut **conn)
                .await
                .unwrap();
            assert!(
                !matched,
                "LIKE must stay case-sensitive on every pooled connection"
            );
        }
    }
}

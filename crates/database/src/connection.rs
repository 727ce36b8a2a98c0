use crate::error::DbError;
use configuration::DatabaseSettings;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;

/// Establishes a connection pool to the SQLite database.
///
/// Foreign keys are switched on for every connection. An in-memory database
/// only lives as long as its last connection, so for `sqlite::memory:` the
/// pool is pinned to one connection that is never recycled.
pub async fn connect(settings: &DatabaseSettings) -> Result<SqlitePool, DbError> {
    if settings.url.trim().is_empty() {
        return Err(DbError::ConnectionConfigError(
            "database.url must be set.".to_string(),
        ));
    }

    let options = SqliteConnectOptions::from_str(&settings.url)
        .map_err(|e| DbError::ConnectionConfigError(e.to_string()))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options =
        SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(settings.acquire_timeout_secs));

    let pool_options = if is_in_memory(&settings.url) {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options.max_connections(settings.max_connections)
    };

    let pool = pool_options.connect_with(options).await?;
    tracing::info!(url = %settings.url, "Connected to the election database.");

    Ok(pool)
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Applies the embedded migrations, bringing the schema up to date.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

/// Loads the bundled parties, candidates and voters.
///
/// Rows carry fixed ids and are inserted with `OR IGNORE`, so seeding twice
/// leaves the data unchanged.
pub async fn seed(pool: &SqlitePool) -> Result<(), DbError> {
    sqlx::raw_sql(include_str!("../seeds/seeds.sql"))
        .execute(pool)
        .await?;
    tracing::info!("Seeded reference data.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_in_memory_urls() {
        assert!(is_in_memory("sqlite::memory:"));
        assert!(is_in_memory("sqlite://election?mode=memory&cache=shared"));
        assert!(!is_in_memory("sqlite://election.db"));
    }
}

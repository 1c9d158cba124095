use anyhow::{Context, Result};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::info;

pub type ConnectionPool = PgPool;

pub struct ConnectionManager;

impl ConnectionManager {
    /// Boot-time dependency: a failure here is fatal and propagates to the
    /// caller instead of being retried.
    pub async fn new_pool(database_url: &str, run_migrations: bool) -> Result<ConnectionPool> {
        let pool = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
            .context("Failed to connect to the database")?;

        info!("Database connection pool established");

        if run_migrations {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("Failed to run database migrations")?;

            info!("Database migrations applied");
        }

        Ok(pool)
    }
}

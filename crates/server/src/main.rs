use anyhow::{Context, Result};
use course_portal_server::handler::AppRouter;
use shared::{
    config::{Config, ConnectionManager},
    state::AppState,
    utils::init_logger,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    init_logger("course_portal_server");

    let config = Config::init().context("Failed to load configuration")?;

    // The database is a boot-time dependency: a connection failure aborts
    // startup with the diagnostic chain instead of being retried.
    let db_pool = ConnectionManager::new_pool(&config.database_url, config.run_migrations)
        .await
        .context("Failed to initialize database pool")?;

    let state = AppState::new(db_pool);

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    Ok(())
}

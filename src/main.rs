use dotenvy::dotenv;
use shop_inventory::{api, config, core::seed_if_empty, errors::Result};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();

    // 3. Load the application configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;
    let addr = app_config.socket_addr()?;

    // 4. Connect and make sure the schema exists
    let db = config::database::create_connection(&app_config)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {}", e))?;
    config::database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to create tables: {}", e))?;

    // 5. Seed sample data before accepting any request
    if app_config.seed {
        seed_if_empty(&db, chrono::Utc::now())
            .await
            .inspect_err(|e| error!("Failed to seed sample data: {}", e))?;
    }

    // 6. Serve
    api::serve(addr, db)
        .await
        .inspect_err(|e| error!("Server error: {}", e))
}

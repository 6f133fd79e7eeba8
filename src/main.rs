use color_eyre::eyre::Result;
use dotenv::dotenv;
use roomsync_api::config::ApiConfig;
use roomsync_store::{BookingStore, seed};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // The fixed user table is always present; rooms and schedules are
    // seeded only when configured.
    let store = BookingStore::new();
    let users = seed::demo_users()?;
    if config.seed_demo_data {
        seed::seed_demo_data(&store)?;
    }

    // Start API server
    roomsync_api::start_server(config, store, users).await?;

    Ok(())
}

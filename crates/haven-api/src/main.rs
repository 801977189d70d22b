//! Authors Haven API server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p haven-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is
//! honored in development).

use haven_common::{try_init_tracing, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;

    let tracing_config = if config.app.env.is_production() {
        TracingConfig::production()
    } else {
        TracingConfig::development()
    };
    if let Err(e) = try_init_tracing(&tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting Authors Haven API server"
    );

    haven_api::run(config).await?;

    Ok(())
}

/**
 * GI-Site Server Entry Point
 *
 * This is the main entry point for the Global Internships backend server.
 * It loads configuration from the environment, initializes the database
 * schema, and starts the Axum HTTP server.
 */

use gi_site::server::{config::AppConfig, init::create_app};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing with env filter support (RUST_LOG)
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info,gi_site=debug".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Load config from environment
    let config = AppConfig::from_env()?;
    let addr = config.bind_addr;
    tracing::info!("Starting gi-server on {}", addr);

    // Create the Axum app (connects the pool, creates the schema, spawns
    // the session sweep task)
    let app = create_app(config).await?;

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on {}", addr);
    axum::serve(listener, app).await?;

    Ok(())
}

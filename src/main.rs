//! SMT Hub Server — factory floor management for SMT production plants.
//!
//! Main entry point that wires all crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use smthub_auth::password::hasher::PasswordHasher;
use smthub_core::config::AppConfig;
use smthub_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("SMTHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SMT Hub v{}", env!("CARGO_PKG_VERSION"));

    tracing::info!("Connecting to database...");
    let db_pool = smthub_database::connection::create_pool(&config.database).await?;

    tracing::info!("Running database migrations...");
    smthub_database::migration::run_migrations(&db_pool).await?;
    tracing::info!("Database migrations complete");

    if config.auth.seed_defaults {
        seed_default_accounts(&db_pool).await?;
    }

    smthub_api::run_server(config, db_pool).await
}

/// Seed the default roles and accounts for a fresh installation.
async fn seed_default_accounts(db_pool: &sqlx::PgPool) -> Result<(), AppError> {
    let user_repo = smthub_database::repositories::UserRepository::new(db_pool.clone());
    let hasher = PasswordHasher::new();

    let admin_hash = hasher.hash_password("admin123")?;
    let operator_hash = hasher.hash_password("operator123")?;

    smthub_database::seed::seed_defaults(&user_repo, &admin_hash, &operator_hash).await
}

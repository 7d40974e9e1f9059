//! Tablebook Server: restaurant reservation booking service.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use tablebook_api::AppState;
use tablebook_core::config::{AppConfig, StorageBackend};
use tablebook_core::error::AppError;
use tablebook_core::traits::SystemClock;
use tablebook_database::{DatabasePool, MemoryReservationStore, ReservationStore};
use tablebook_service::ReservationService;

#[tokio::main]
async fn main() {
    let env = std::env::var("TABLEBOOK_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!("Configuration loaded (env: {})", env);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {}", e);
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
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Tablebook v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Persistence backend ──────────────────────────────
    let (store, db_pool): (Arc<dyn ReservationStore>, Option<DatabasePool>) =
        match config.database.backend {
            StorageBackend::Postgres => {
                tracing::info!("Connecting to database...");
                let db_pool = DatabasePool::connect(&config.database).await?;

                db_pool.migrate().await?;

                (Arc::new(db_pool.reservations()), Some(db_pool))
            }
            StorageBackend::Memory => {
                tracing::warn!("Using in-memory storage; reservations are lost on restart");
                (Arc::new(MemoryReservationStore::new()), None)
            }
        };

    // ── Step 2: Services ─────────────────────────────────────────
    let reservation_service =
        ReservationService::new(store, config.booking.clone(), Arc::new(SystemClock));
    tracing::info!(
        daily_capacity = config.booking.daily_capacity,
        max_party_size = config.booking.max_party_size,
        open_weekdays = ?config.booking.open_weekdays,
        "Reservation service initialized"
    );

    // ── Step 3: HTTP server ──────────────────────────────────────
    let mut state = AppState::new(config, reservation_service);
    if let Some(db_pool) = &db_pool {
        state = state.with_database(db_pool.clone());
    }
    let result = tablebook_api::run_server(state).await;

    if let Some(db_pool) = db_pool {
        db_pool.close().await;
    }

    result?;
    tracing::info!("Tablebook server shut down gracefully");
    Ok(())
}

//! Application state shared across all handlers and middleware.

use std::sync::Arc;
use std::time::Instant;

use tablebook_core::config::AppConfig;
use tablebook_database::DatabasePool;
use tablebook_service::ReservationService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are cheap to clone across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Reservation admission service
    pub reservation_service: Arc<ReservationService>,
    /// Pool pinged by the health check; `None` on the memory backend
    pub database: Option<DatabasePool>,
    /// When the process started serving
    pub started_at: Instant,
}

impl AppState {
    /// Creates the state for a freshly built service.
    pub fn new(config: AppConfig, reservation_service: ReservationService) -> Self {
        Self {
            config: Arc::new(config),
            reservation_service: Arc::new(reservation_service),
            database: None,
            started_at: Instant::now(),
        }
    }

    /// Attaches the PostgreSQL pool so `/health` reports on it.
    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }
}

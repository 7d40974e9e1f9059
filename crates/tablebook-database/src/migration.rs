//! Schema migrations embedded from `migrations/`.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use tablebook_core::error::{AppError, ErrorKind};
use tablebook_core::result::AppResult;

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Applies every embedded migration not yet recorded in the database.
pub async fn run_migrations(pool: &PgPool) -> AppResult<()> {
    info!(
        embedded = MIGRATOR.iter().count(),
        "Applying reservation schema migrations"
    );

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(ErrorKind::Database, format!("Migration failed: {e}"), e)
    })?;

    info!("Reservation schema is up to date");
    Ok(())
}

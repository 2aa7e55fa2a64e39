use shared_types::AppError;
use sqlx::postgres::PgPoolOptions;
use sqlx::{Pool, Postgres};
use std::sync::OnceLock;
use tokio::sync::OnceCell;

/// Pool created lazily; no connections are opened until the first query.
/// This avoids binding to a specific tokio runtime at init time.
static POOL: OnceLock<Pool<Postgres>> = OnceLock::new();
static MIGRATED: OnceCell<()> = OnceCell::const_new();

/// Create a new database connection pool from environment variables.
pub fn create_pool() -> Result<Pool<Postgres>, AppError> {
    // .env is optional; production sets variables directly.
    let _ = dotenvy::dotenv();

    let database_url = std::env::var("DATABASE_URL")
        .map_err(|_| AppError::unavailable("DATABASE_URL is not set"))?;

    let max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(5);

    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(std::time::Duration::from_secs(5))
        .connect_lazy(&database_url)
        .map_err(|e| AppError::database(e.to_string()))
}

/// Run database migrations against the given pool.
pub async fn run_migrations(pool: &Pool<Postgres>) -> Result<(), AppError> {
    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| AppError::database(format!("migration failed: {e}")))
}

/// Get or initialize the records pool.
/// Migrations run once on the first successful call.
pub async fn get_db() -> Result<&'static Pool<Postgres>, AppError> {
    let pool = match POOL.get() {
        Some(pool) => pool,
        None => {
            let created = create_pool()?;
            POOL.get_or_init(|| created)
        }
    };

    MIGRATED
        .get_or_try_init(|| async {
            run_migrations(pool).await?;
            tracing::info!("profiles schema is up to date");
            Ok::<(), AppError>(())
        })
        .await?;

    Ok(pool)
}

pub mod attendee;
pub mod meeting;

use crate::PGPool;
use log::info;
use sqlx::migrate::Migrator;
use sqlx::postgres::PgPoolOptions;

/// Schema migrations embedded from `migrations/`; integration tests and
/// deployments run them through this handle.
pub static MIGRATOR: Migrator = sqlx::migrate!();

pub async fn init_db_pool(db_url: &str) -> PGPool {
    let pool: PGPool = PgPoolOptions::new()
        .max_connections(5)
        .connect(db_url)
        .await
        .unwrap_or_else(|e| panic!("Failed to connect to database: {:?}", e));
    info!("Connected with postgresql");
    pool
}

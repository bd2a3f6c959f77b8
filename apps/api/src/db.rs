use anyhow::Result;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use tracing::info;

use crate::models::snapshot::Category;

/// Creates and returns a PostgreSQL connection pool.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    info!("Connecting to PostgreSQL...");

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await?;

    info!("PostgreSQL connection pool established");
    Ok(pool)
}

/// Creates the per-category tables if they do not exist yet.
///
/// Every category gets the same row shape: rows scoped by user, ordered by
/// `item_index`, payload kept as JSONB exactly as the client sent it. A lone
/// row at index -1 marks a value that was stored as a single object rather
/// than a list.
pub async fn ensure_schema(pool: &PgPool) -> Result<()> {
    for category in Category::ALL {
        let statement = format!(
            "CREATE TABLE IF NOT EXISTS {} (\
             user_id UUID NOT NULL, \
             item_index INT NOT NULL, \
             data JSONB NOT NULL, \
             updated_at TIMESTAMPTZ NOT NULL DEFAULT now(), \
             PRIMARY KEY (user_id, item_index))",
            category.table()
        );
        sqlx::query(&statement).execute(pool).await?;
    }
    info!("Schema ensured for {} category tables", Category::ALL.len());
    Ok(())
}

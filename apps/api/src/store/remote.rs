//! Relational backend — one table per category, rows scoped by user id.
//!
//! List values are stored one row per element so entries stay individually
//! addressable; a non-list value is stored as a lone row at index -1 and
//! comes back exactly as written. Snapshot reads degrade per table: one
//! unreadable table costs that category, never the whole batch.

use async_trait::async_trait;
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::watch;
use tracing::warn;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::snapshot::{Category, RawSnapshot};
use crate::store::ResumeStore;

/// Sentinel index marking a value stored whole rather than element-wise.
const WHOLE_VALUE_INDEX: i32 = -1;

pub struct PgStore {
    pool: PgPool,
    revision_tx: watch::Sender<u64>,
}

impl PgStore {
    pub fn new(pool: PgPool) -> PgStore {
        let (revision_tx, _) = watch::channel(0);
        PgStore { pool, revision_tx }
    }

    fn bump(&self) {
        self.revision_tx.send_modify(|revision| *revision += 1);
    }

    async fn fetch_rows(
        &self,
        user_id: Uuid,
        category: Category,
    ) -> Result<Vec<(i32, Value)>, AppError> {
        let statement = format!(
            "SELECT item_index, data FROM {} WHERE user_id = $1 ORDER BY item_index",
            category.table()
        );
        let rows: Vec<(i32, Value)> = sqlx::query_as(&statement)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

/// Splits a stored value into indexed rows.
fn explode(value: Value) -> Vec<(i32, Value)> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(index, item)| (index as i32, item))
            .collect(),
        other => vec![(WHOLE_VALUE_INDEX, other)],
    }
}

/// Rebuilds the stored value from its rows. No rows means no data.
fn assemble(rows: Vec<(i32, Value)>) -> Option<Value> {
    if rows.is_empty() {
        return None;
    }
    if rows.len() == 1 && rows[0].0 == WHOLE_VALUE_INDEX {
        return rows.into_iter().next().map(|(_, value)| value);
    }
    Some(Value::Array(rows.into_iter().map(|(_, value)| value).collect()))
}

#[async_trait]
impl ResumeStore for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    fn revision(&self) -> watch::Receiver<u64> {
        self.revision_tx.subscribe()
    }

    async fn load_snapshot(&self, user_id: Uuid) -> RawSnapshot {
        let mut snapshot = RawSnapshot::default();
        for category in Category::ALL {
            match self.fetch_rows(user_id, category).await {
                Ok(rows) => snapshot.set(category, assemble(rows)),
                Err(err) => {
                    warn!(
                        "reading {} for {user_id} failed, rendering without it: {err}",
                        category.key()
                    );
                }
            }
        }
        snapshot
    }

    async fn load_category(
        &self,
        user_id: Uuid,
        category: Category,
    ) -> Result<Option<Value>, AppError> {
        Ok(assemble(self.fetch_rows(user_id, category).await?))
    }

    async fn save_category(
        &self,
        user_id: Uuid,
        category: Category,
        value: Value,
    ) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        let delete = format!("DELETE FROM {} WHERE user_id = $1", category.table());
        sqlx::query(&delete).bind(user_id).execute(&mut *tx).await?;
        let insert = format!(
            "INSERT INTO {} (user_id, item_index, data, updated_at) VALUES ($1, $2, $3, now())",
            category.table()
        );
        for (index, item) in explode(value) {
            sqlx::query(&insert)
                .bind(user_id)
                .bind(index)
                .bind(item)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        self.bump();
        Ok(())
    }

    async fn delete_category(&self, user_id: Uuid, category: Category) -> Result<(), AppError> {
        let statement = format!("DELETE FROM {} WHERE user_id = $1", category.table());
        sqlx::query(&statement)
            .bind(user_id)
            .execute(&self.pool)
            .await?;
        self.bump();
        Ok(())
    }

    async fn delete_all(&self, user_id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;
        for category in Category::ALL {
            let statement = format!("DELETE FROM {} WHERE user_id = $1", category.table());
            sqlx::query(&statement).bind(user_id).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        self.bump();
        Ok(())
    }
}

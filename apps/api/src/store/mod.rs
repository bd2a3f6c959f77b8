//! Persistence collaborators behind one trait.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`, selected at startup from
//! config: a single-document JSON file for the local mode, PostgreSQL for the
//! remote mode. Handlers and the preview driver never know which one they got.
//!
//! Reads of the full snapshot never fail: a category that cannot be read
//! degrades to absent with a warning. Writes are user-initiated and surface
//! their errors.

pub mod handlers;
pub mod local;
pub mod remote;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::watch;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::snapshot::{Category, RawSnapshot};

pub use local::LocalStore;
pub use remote::PgStore;

/// One persistence backend. All methods take a user id; the local backend is
/// single-profile and ignores it.
#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Short name used in logs and the health probe.
    fn backend_name(&self) -> &'static str;

    /// Change feed for the preview driver. The revision bumps on every
    /// successful write through this process; external writers are covered
    /// by the driver's poll instead.
    fn revision(&self) -> watch::Receiver<u64>;

    /// Whether this backend stores the category at all. Writes to a category
    /// the backend does not store fail validation; import checks this for the
    /// whole payload before its first write.
    fn accepts(&self, _category: Category) -> bool {
        true
    }

    /// Reads every category. Per-category failures degrade to absent with a
    /// warning; this method itself never fails.
    async fn load_snapshot(&self, user_id: Uuid) -> RawSnapshot;

    /// Reads one category. `None` is the valid "no data" state.
    async fn load_category(
        &self,
        user_id: Uuid,
        category: Category,
    ) -> Result<Option<Value>, AppError>;

    /// Replaces one category's value as-written.
    async fn save_category(
        &self,
        user_id: Uuid,
        category: Category,
        value: Value,
    ) -> Result<(), AppError>;

    /// Clears one category.
    async fn delete_category(&self, user_id: Uuid, category: Category) -> Result<(), AppError>;

    /// Clears every category for the user. User-initiated; errors surface.
    async fn delete_all(&self, user_id: Uuid) -> Result<(), AppError>;
}

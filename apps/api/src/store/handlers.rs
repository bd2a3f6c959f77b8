//! HTTP handlers for the data CRUD and export/import surface.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{export_payload, parse_import, ExportPayload};
use crate::models::snapshot::{Category, RawSnapshot};
use crate::state::AppState;
use crate::store::ResumeStore;

/// All data routes scope by user. The local backend is single-profile, so the
/// id defaults to nil and the route surface stays identical across backends.
#[derive(Deserialize)]
pub struct UserQuery {
    #[serde(default)]
    pub user_id: Option<Uuid>,
}

impl UserQuery {
    pub fn id(&self) -> Uuid {
        self.user_id.unwrap_or_else(Uuid::nil)
    }
}

fn parse_category(raw: &str) -> Result<Category, AppError> {
    Category::parse(raw)
        .ok_or_else(|| AppError::NotFound(format!("unknown data category '{raw}'")))
}

/// GET /api/v1/data
pub async fn handle_get_data(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> Result<Json<RawSnapshot>, AppError> {
    Ok(Json(state.store.load_snapshot(params.id()).await))
}

#[derive(Serialize)]
pub struct CategoryResponse {
    pub category: &'static str,
    pub data: Option<Value>,
}

/// GET /api/v1/data/:category
pub async fn handle_get_category(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Query(params): Query<UserQuery>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = parse_category(&raw)?;
    let data = state.store.load_category(params.id(), category).await?;
    Ok(Json(CategoryResponse {
        category: category.key(),
        data,
    }))
}

/// PUT /api/v1/data/:category
pub async fn handle_put_category(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Query(params): Query<UserQuery>,
    Json(value): Json<Value>,
) -> Result<StatusCode, AppError> {
    let category = parse_category(&raw)?;
    state
        .store
        .save_category(params.id(), category, value)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/data/:category
pub async fn handle_delete_category(
    State(state): State<AppState>,
    Path(raw): Path<String>,
    Query(params): Query<UserQuery>,
) -> Result<StatusCode, AppError> {
    let category = parse_category(&raw)?;
    state.store.delete_category(params.id(), category).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/data
pub async fn handle_delete_all(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> Result<StatusCode, AppError> {
    state.store.delete_all(params.id()).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/export
pub async fn handle_export(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> Result<Json<ExportPayload>, AppError> {
    let snapshot = state.store.load_snapshot(params.id()).await;
    Ok(Json(export_payload(snapshot)))
}

#[derive(Debug, Serialize)]
pub struct ImportOutcome {
    pub imported: usize,
    pub categories: Vec<&'static str>,
}

/// POST /api/v1/import
///
/// The body arrives as a raw string so broken JSON can be reported as a
/// syntax failure instead of a generic extractor rejection. Validation runs
/// fully before the first write.
pub async fn handle_import(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
    body: String,
) -> Result<Json<ImportOutcome>, AppError> {
    let payload = parse_import(&body)?;
    let outcome = apply_import(state.store.as_ref(), params.id(), &payload).await?;
    state.refresh.notify_one();
    Ok(Json(outcome))
}

/// Applies a parsed payload to the store. Every category is checked against
/// the backend before the first write, so a rejected payload leaves the
/// store exactly as it was.
pub(crate) async fn apply_import(
    store: &dyn ResumeStore,
    user_id: Uuid,
    payload: &ExportPayload,
) -> Result<ImportOutcome, AppError> {
    let unsupported: Vec<&'static str> = Category::ALL
        .into_iter()
        .filter(|category| payload.data.get(*category).is_some() && !store.accepts(*category))
        .map(Category::key)
        .collect();
    if !unsupported.is_empty() {
        return Err(AppError::Validation(format!(
            "payload contains categories the {} backend does not store: {}",
            store.backend_name(),
            unsupported.join(", ")
        )));
    }

    let mut categories = Vec::new();
    for category in Category::ALL {
        if let Some(value) = payload.data.get(category) {
            store.save_category(user_id, category, value.clone()).await?;
            categories.push(category.key());
        }
    }
    Ok(ImportOutcome {
        imported: categories.len(),
        categories,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::LocalStore;
    use serde_json::json;

    fn make_store(dir: &tempfile::TempDir) -> LocalStore {
        LocalStore::open(dir.path()).expect("store should open in a tempdir")
    }

    fn payload_of(data: Value) -> ExportPayload {
        let body = json!({ "version": 1, "data": data }).to_string();
        parse_import(&body).expect("test payload must parse")
    }

    #[tokio::test]
    async fn test_import_applies_and_reports_categories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = make_store(&dir);
        let payload = payload_of(json!({
            "skills": ["Go", "Rust"],
            "hobbies": ["chess"],
        }));

        let outcome = apply_import(&store, Uuid::nil(), &payload)
            .await
            .expect("local-only payload must import");
        assert_eq!(outcome.imported, 2);
        assert_eq!(outcome.categories, vec!["skills", "hobbies"]);
        assert_eq!(
            store
                .load_category(Uuid::nil(), Category::Skills)
                .await
                .expect("read"),
            Some(json!(["Go", "Rust"]))
        );
    }

    #[tokio::test]
    async fn test_rejected_import_writes_nothing() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = make_store(&dir);
        store
            .save_category(Uuid::nil(), Category::Skills, json!(["Old"]))
            .await
            .expect("seed");

        // A postgres-mode export carries remote-only categories. The local
        // backend must refuse the whole payload up front, not overwrite the
        // local categories and then fail.
        let payload = payload_of(json!({
            "skills": ["New"],
            "certifications": [{ "name": "Cambridge English C2" }],
        }));
        let err = apply_import(&store, Uuid::nil(), &payload)
            .await
            .expect_err("remote-only categories must be rejected on local");
        assert!(matches!(err, AppError::Validation(_)));

        assert_eq!(
            store
                .load_category(Uuid::nil(), Category::Skills)
                .await
                .expect("read"),
            Some(json!(["Old"])),
            "a rejected import must leave existing data untouched"
        );
    }

    #[tokio::test]
    async fn test_rejected_import_does_not_bump_revision() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = make_store(&dir);
        let revision = store.revision();
        let payload = payload_of(json!({ "languages": [{ "name": "French" }] }));

        apply_import(&store, Uuid::nil(), &payload)
            .await
            .expect_err("must reject");
        assert_eq!(*revision.borrow(), 0, "no write may happen before the check");
    }
}

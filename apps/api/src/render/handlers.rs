//! HTTP handlers for templates, selection, preview and print.

use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::snapshot::ResumeData;
use crate::render::listing::render_listing;
use crate::render::page::print_shell;
use crate::render::{compose, recommend_template, TemplateId, TemplateSelection};
use crate::state::AppState;
use crate::store::handlers::UserQuery;

#[derive(Serialize)]
pub struct TemplateCatalogEntry {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub default_accent: &'static str,
}

#[derive(Serialize)]
pub struct TemplateCatalog {
    pub templates: Vec<TemplateCatalogEntry>,
    pub default: &'static str,
}

/// GET /api/v1/templates
pub async fn handle_get_templates() -> Json<TemplateCatalog> {
    Json(TemplateCatalog {
        templates: TemplateId::ALL
            .into_iter()
            .map(|id| TemplateCatalogEntry {
                id: id.as_str(),
                label: id.label(),
                description: id.description(),
                default_accent: id.default_accent(),
            })
            .collect(),
        default: TemplateId::default().as_str(),
    })
}

#[derive(Deserialize)]
pub struct RecommendQuery {
    #[serde(default)]
    pub target: String,
}

#[derive(Serialize)]
pub struct Recommendation {
    pub target: String,
    pub template: &'static str,
}

/// GET /api/v1/templates/recommend?target=...
pub async fn handle_recommend(Query(params): Query<RecommendQuery>) -> Json<Recommendation> {
    let template = recommend_template(&params.target);
    Json(Recommendation {
        target: params.target,
        template: template.as_str(),
    })
}

/// GET /api/v1/selection
pub async fn handle_get_selection(State(state): State<AppState>) -> Json<TemplateSelection> {
    Json(state.selection.read().await.clone())
}

/// PUT /api/v1/selection
///
/// Lenient by construction: an unknown template name in the body resolves to
/// the default during deserialization, so this handler cannot 4xx on it.
pub async fn handle_put_selection(
    State(state): State<AppState>,
    Json(selection): Json<TemplateSelection>,
) -> Json<TemplateSelection> {
    {
        let mut current = state.selection.write().await;
        *current = selection.clone();
    }
    state.refresh.notify_one();
    Json(selection)
}

/// GET /preview — the latest composed frame, scaled for screen.
pub async fn handle_preview(State(state): State<AppState>) -> Html<String> {
    Html(state.preview_rx.borrow().html.clone())
}

/// GET /print — a fresh 1:1 composition for print/PDF.
pub async fn handle_print(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> Result<Html<String>, AppError> {
    let raw = state.store.load_snapshot(params.id()).await;
    let data = ResumeData::from_raw(&raw);
    let selection = state.selection.read().await.clone();
    let document = compose(&data, &selection);
    Ok(Html(print_shell(&document)))
}

/// GET /api/v1/listing — the plain management view with placeholders.
pub async fn handle_listing(
    State(state): State<AppState>,
    Query(params): Query<UserQuery>,
) -> Result<Html<String>, AppError> {
    let raw = state.store.load_snapshot(params.id()).await;
    let data = ResumeData::from_raw(&raw);
    Ok(Html(render_listing(&data)))
}

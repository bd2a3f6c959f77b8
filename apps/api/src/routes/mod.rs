pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::render::handlers as render_handlers;
use crate::state::AppState;
use crate::store::handlers as data_handlers;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Data API
        .route(
            "/api/v1/data",
            get(data_handlers::handle_get_data).delete(data_handlers::handle_delete_all),
        )
        .route(
            "/api/v1/data/:category",
            get(data_handlers::handle_get_category)
                .put(data_handlers::handle_put_category)
                .delete(data_handlers::handle_delete_category),
        )
        // Export / import
        .route("/api/v1/export", get(data_handlers::handle_export))
        .route("/api/v1/import", post(data_handlers::handle_import))
        // Templates and selection
        .route("/api/v1/templates", get(render_handlers::handle_get_templates))
        .route(
            "/api/v1/templates/recommend",
            get(render_handlers::handle_recommend),
        )
        .route(
            "/api/v1/selection",
            get(render_handlers::handle_get_selection)
                .put(render_handlers::handle_put_selection),
        )
        // Views
        .route("/api/v1/listing", get(render_handlers::handle_listing))
        .route("/preview", get(render_handlers::handle_preview))
        .route("/print", get(render_handlers::handle_print))
        .with_state(state)
}

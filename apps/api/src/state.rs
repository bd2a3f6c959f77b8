use std::sync::Arc;

use tokio::sync::{watch, Notify, RwLock};

use crate::config::Config;
use crate::preview::PreviewFrame;
use crate::render::TemplateSelection;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable persistence backend, chosen at startup from STORAGE_BACKEND.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
    /// The current template choice; updated by the selection route, read by
    /// every render.
    pub selection: Arc<RwLock<TemplateSelection>>,
    /// Latest frame published by the preview driver.
    pub preview_rx: watch::Receiver<PreviewFrame>,
    /// Nudges the preview driver outside its poll cadence (selection changes,
    /// imports).
    pub refresh: Arc<Notify>,
}

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use uuid::Uuid;

use crate::render::TemplateId;

/// Which persistence collaborator backs the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// Single JSON document on disk. The default; needs no external service.
    Local,
    /// One table per category in PostgreSQL.
    Postgres,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub storage_backend: StorageBackend,
    /// Directory holding the local store document. Ignored on postgres.
    pub data_dir: PathBuf,
    /// Required only when `storage_backend` is postgres.
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Fallback poll interval of the preview driver, in milliseconds.
    pub preview_poll_ms: u64,
    pub default_template: TemplateId,
    /// Profile the preview driver renders. Defaults to the nil UUID, the
    /// single-profile id the local backend uses throughout.
    pub preview_user_id: Uuid,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let storage_backend = match std::env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "local".to_string())
            .trim()
            .to_lowercase()
            .as_str()
        {
            "local" => StorageBackend::Local,
            "postgres" => StorageBackend::Postgres,
            other => bail!("STORAGE_BACKEND must be 'local' or 'postgres', got '{other}'"),
        };

        let database_url = match storage_backend {
            StorageBackend::Postgres => Some(require_env("DATABASE_URL")?),
            StorageBackend::Local => std::env::var("DATABASE_URL").ok(),
        };

        Ok(Config {
            storage_backend,
            data_dir: PathBuf::from(
                std::env::var("DATA_DIR").unwrap_or_else(|_| "./data".to_string()),
            ),
            database_url,
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            preview_poll_ms: std::env::var("PREVIEW_POLL_MS")
                .unwrap_or_else(|_| "2000".to_string())
                .parse::<u64>()
                .context("PREVIEW_POLL_MS must be a number of milliseconds")?,
            // Unknown template names fall back to the default, same as at
            // render time; a typo here must not stop the service.
            default_template: TemplateId::parse(
                &std::env::var("DEFAULT_TEMPLATE").unwrap_or_default(),
            ),
            preview_user_id: match std::env::var("PREVIEW_USER_ID") {
                Ok(raw) => Uuid::parse_str(raw.trim())
                    .context("PREVIEW_USER_ID must be a valid UUID")?,
                Err(_) => Uuid::nil(),
            },
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}

//! Export/import boundary — one JSON payload carrying the full data set.
//!
//! Export wraps the raw snapshot with a version marker and a timestamp so a
//! future format change can be detected on import. Import validation runs
//! before anything touches the store and keeps two failure modes apart: a
//! payload that is not JSON at all, and JSON that is not an export payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::AppError;
use crate::models::snapshot::{Category, RawSnapshot};

/// Current export format version. Bump on any incompatible payload change.
pub const EXPORT_VERSION: u64 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportPayload {
    pub version: u64,
    pub exported_at: DateTime<Utc>,
    pub data: RawSnapshot,
}

/// Wraps a snapshot for download.
pub fn export_payload(data: RawSnapshot) -> ExportPayload {
    ExportPayload {
        version: EXPORT_VERSION,
        exported_at: Utc::now(),
        data,
    }
}

/// Parses and validates an uploaded payload.
///
/// Returns `ImportSyntax` when the body is not JSON, `ImportFormat` when it
/// is JSON but fails the structural checks. Category values are carried
/// through as-is; their shapes are the normalizer's problem, not import's.
pub fn parse_import(body: &str) -> Result<ExportPayload, AppError> {
    let value: Value =
        serde_json::from_str(body).map_err(|err| AppError::ImportSyntax(err.to_string()))?;

    let map = value
        .as_object()
        .ok_or_else(|| AppError::ImportFormat("top level must be an object".to_string()))?;

    let version = map
        .get("version")
        .and_then(Value::as_u64)
        .ok_or_else(|| AppError::ImportFormat("missing numeric 'version' field".to_string()))?;
    if version != EXPORT_VERSION {
        return Err(AppError::ImportFormat(format!(
            "unsupported export version {version}, expected {EXPORT_VERSION}"
        )));
    }

    let data = map
        .get("data")
        .ok_or_else(|| AppError::ImportFormat("missing 'data' field".to_string()))?;
    let categories = data
        .as_object()
        .ok_or_else(|| AppError::ImportFormat("'data' must be an object".to_string()))?;
    for key in categories.keys() {
        if Category::parse(key).is_none() {
            return Err(AppError::ImportFormat(format!(
                "'data' contains unknown category '{key}'"
            )));
        }
    }

    let snapshot: RawSnapshot = serde_json::from_value(data.clone())
        .map_err(|err| AppError::ImportFormat(err.to_string()))?;

    Ok(ExportPayload {
        version,
        exported_at: map
            .get("exported_at")
            .cloned()
            .and_then(|stamp| serde_json::from_value(stamp).ok())
            .unwrap_or_else(Utc::now),
        data: snapshot,
    })
}

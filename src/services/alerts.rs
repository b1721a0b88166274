// src/services/alerts.rs
use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tokio::fs::read_to_string;

use crate::error::AlertsError;

/// Read and parse the alerts file. Re-read on every call.
pub async fn load_alerts(path: impl AsRef<Path>) -> Result<Value, AlertsError> {
    let content = read_to_string(path).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => AlertsError::NotFound,
        _ => AlertsError::Other(e.to_string()),
    })?;

    serde_json::from_str(&content).map_err(|e| AlertsError::Other(e.to_string()))
}

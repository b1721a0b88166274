use axum::{Json, extract::State};
use serde_json::Value;

use crate::{error::AlertsError, services::alerts::load_alerts, state::SharedState};

// Contents are passed through untouched; failures become `{"error": ...}`.
pub async fn get_alerts_handler(
    State(state): State<SharedState>,
) -> Result<Json<Value>, AlertsError> {
    let alerts = load_alerts(&state.alerts_file).await?;
    Ok(Json(alerts))
}

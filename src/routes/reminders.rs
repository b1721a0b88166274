use axum::Json;

use crate::{
    message::{ReminderRequest, ReminderResponse},
    services::reminders::record_reminder,
};

pub async fn create_reminder_handler(
    Json(payload): Json<ReminderRequest>,
) -> Json<ReminderResponse> {
    Json(record_reminder(&payload))
}

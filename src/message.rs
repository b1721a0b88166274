// src/message.rs
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Language tag of the user, e.g. `en` or `hi`.
    pub language: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ChatResponse {
    pub bot_reply: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReminderRequest {
    pub name: String,
    pub dob: String,
    pub phone: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderStatus {
    Success,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ReminderResponse {
    pub status: ReminderStatus,
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

// src/error.rs
use axum::{
    Json,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::message::ErrorBody;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid bind address: {0}")]
    InvalidBindAddr(String),
    #[error("invalid allowed origin: {0}")]
    InvalidOrigin(String),
}

#[derive(Debug, Error)]
pub enum TranslationError {
    #[error("error connecting to translation API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("translation API error: {0}")]
    Upstream(String),
}

#[derive(Debug, Error)]
pub enum DialogueError {
    #[error("error connecting to dialogue server: {0}")]
    Transport(#[from] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum AlertsError {
    #[error("Alerts data file not found.")]
    NotFound,
    #[error("An error occurred while reading alerts data: {0}")]
    Other(String),
}

// Alert failures are still a 200 with an `error` body.
impl IntoResponse for AlertsError {
    fn into_response(self) -> Response {
        Json(ErrorBody {
            error: self.to_string(),
        })
        .into_response()
    }
}

// src/services/dialogue.rs
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::DialogueError;

#[derive(Debug, Serialize)]
struct DialoguePayload<'a> {
    sender: &'a str,
    message: &'a str,
}

/// One entry of the webhook's reply list. Only `text` is consumed.
#[derive(Debug, Clone, Deserialize)]
pub struct DialogueReply {
    #[serde(default)]
    pub text: Option<String>,
}

/// REST webhook client for the dialogue server.
#[derive(Debug, Clone)]
pub struct DialogueClient {
    client: Client,
    webhook_url: String,
    sender: String,
}

impl DialogueClient {
    pub fn new(client: Client, webhook_url: impl Into<String>, sender: impl Into<String>) -> Self {
        Self {
            client,
            webhook_url: webhook_url.into(),
            sender: sender.into(),
        }
    }

    pub async fn send(&self, message: &str) -> Result<Vec<DialogueReply>, DialogueError> {
        let replies = self
            .client
            .post(&self.webhook_url)
            .json(&DialoguePayload {
                sender: &self.sender,
                message,
            })
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<DialogueReply>>()
            .await?;
        Ok(replies)
    }
}

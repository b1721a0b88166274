// src/state.rs
use std::path::PathBuf;
use std::sync::Arc;

use reqwest::Client;

use crate::config::Config;
use crate::services::dialogue::DialogueClient;
use crate::services::translator::Translator;

pub type SharedState = Arc<AppState>;

#[derive(Debug)]
pub struct AppState {
    pub translator: Translator,
    pub dialogue: DialogueClient,
    pub alerts_file: PathBuf,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        // One pooled client shared by both upstreams, library default timeouts.
        let client = Client::new();
        Self {
            translator: Translator::new(client.clone(), &config.translation_url),
            dialogue: DialogueClient::new(client, &config.dialogue_url, &config.dialogue_sender),
            alerts_file: PathBuf::from(&config.alerts_file),
        }
    }
}

// src/services/translator.rs
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use crate::error::TranslationError;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslationPayload {
    response_status: Value,
    #[serde(default)]
    response_data: Option<TranslatedData>,
    #[serde(default)]
    response_details: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TranslatedData {
    translated_text: String,
}

/// Client for the MyMemory-style translation endpoint.
#[derive(Debug, Clone)]
pub struct Translator {
    client: Client,
    base_url: String,
}

impl Translator {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Translate `text`, returning it unchanged when the languages match or
    /// when the upstream call fails in any way.
    pub async fn translate(&self, text: &str, source_lang: &str, target_lang: &str) -> String {
        if source_lang == target_lang {
            return text.to_string();
        }

        match self.request_translation(text, source_lang, target_lang).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!(source_lang, target_lang, "{e}");
                text.to_string()
            }
        }
    }

    async fn request_translation(
        &self,
        text: &str,
        source_lang: &str,
        target_lang: &str,
    ) -> Result<String, TranslationError> {
        let langpair = format!("{}|{}", source_lang, target_lang);

        let payload: TranslationPayload = self
            .client
            .get(&self.base_url)
            .query(&[("q", text), ("langpair", langpair.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        if payload.response_status.as_f64() != Some(200.0) {
            let details = payload
                .response_details
                .map(|d| match d {
                    Value::String(s) => s,
                    other => other.to_string(),
                })
                .unwrap_or_else(|| format!("status {}", payload.response_status));
            return Err(TranslationError::Upstream(details));
        }

        payload
            .response_data
            .map(|d| d.translated_text)
            .ok_or_else(|| TranslationError::Upstream("missing responseData".to_string()))
    }
}

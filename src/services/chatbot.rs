// src/services/chatbot.rs
use tracing::warn;

use super::dialogue::{DialogueClient, DialogueReply};
use super::translator::Translator;

/// Working language of the dialogue server.
pub const NEUTRAL_LANGUAGE: &str = "en";

pub const CONNECTION_FALLBACK: &str = "Sorry, I'm having connection issues right now.";
pub const NOT_UNDERSTOOD_FALLBACK: &str = "Sorry, I couldn't understand that.";

/// Pick the English reply out of the dialogue server's answer.
pub fn select_reply(replies: &[DialogueReply]) -> String {
    match replies.first() {
        Some(first) => first
            .text
            .clone()
            .unwrap_or_else(|| NOT_UNDERSTOOD_FALLBACK.to_string()),
        None => CONNECTION_FALLBACK.to_string(),
    }
}

/// Translate in, ask the dialogue server, translate back out.
/// Upstream failures never surface; the caller always gets some text.
pub async fn generate_reply(
    translator: &Translator,
    dialogue: &DialogueClient,
    user_msg: &str,
    user_lang: &str,
) -> String {
    let message_for_bot = translator
        .translate(user_msg, user_lang, NEUTRAL_LANGUAGE)
        .await;

    let reply_english = match dialogue.send(&message_for_bot).await {
        Ok(replies) => select_reply(&replies),
        Err(e) => {
            warn!("{e}");
            CONNECTION_FALLBACK.to_string()
        }
    };

    translator
        .translate(&reply_english, NEUTRAL_LANGUAGE, user_lang)
        .await
}

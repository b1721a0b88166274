use axum::{Json, extract::State};

use crate::{
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_reply,
    state::SharedState,
};

pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let bot_reply = generate_reply(
        &state.translator,
        &state.dialogue,
        &payload.message,
        &payload.language,
    )
    .await;

    Json(ChatResponse { bot_reply })
}

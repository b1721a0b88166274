// Fake upstreams for the translation API and the dialogue webhook.
#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use arogya_gateway::config::Config;
use arogya_gateway::routes::create_router;
use arogya_gateway::state::AppState;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde_json::{Value, json};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
pub struct Recorder {
    hits: Arc<AtomicUsize>,
    seen: Arc<Mutex<Vec<Value>>>,
}

impl Recorder {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Value> {
        self.seen.lock().unwrap().clone()
    }

    fn record(&self, value: Value) {
        self.hits.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(value);
    }
}

#[derive(Clone, Copy)]
pub enum TranslatorMode {
    /// Reply `[<langpair>] <q>` with responseStatus 200.
    Echo,
    /// Well-formed body carrying a non-200 internal status.
    InternalStatus(u64),
    /// Bare HTTP error status.
    HttpStatus(StatusCode),
    /// 200 OK with this exact body, labelled as JSON.
    Raw(&'static str),
}

async fn serve(app: Router) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

async fn fake_translate(
    State((mode, recorder)): State<(TranslatorMode, Recorder)>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    recorder.record(json!(&params));
    match mode {
        TranslatorMode::Echo => Json(json!({
            "responseStatus": 200,
            "responseData": {
                "translatedText": format!("[{}] {}", params["langpair"], params["q"]),
            },
        }))
        .into_response(),
        TranslatorMode::InternalStatus(code) => Json(json!({
            "responseStatus": code,
            "responseDetails": "'AA' IS AN INVALID TARGET LANGUAGE",
            "responseData": { "translatedText": "should be ignored" },
        }))
        .into_response(),
        TranslatorMode::HttpStatus(status) => status.into_response(),
        TranslatorMode::Raw(body) => json_labelled(StatusCode::OK, body),
    }
}

pub async fn spawn_translator(mode: TranslatorMode) -> (String, Recorder) {
    let recorder = Recorder::default();
    let app = Router::new()
        .route("/get", get(fake_translate))
        .with_state((mode, recorder.clone()));
    let addr = serve(app).await;
    (format!("http://{}/get", addr), recorder)
}

async fn fake_webhook(
    State((replies, recorder)): State<(Value, Recorder)>,
    Json(body): Json<Value>,
) -> Json<Value> {
    recorder.record(body);
    Json(replies)
}

pub async fn spawn_dialogue(replies: Value) -> (String, Recorder) {
    let recorder = Recorder::default();
    let app = Router::new()
        .route("/webhooks/rest/webhook", post(fake_webhook))
        .with_state((replies, recorder.clone()));
    let addr = serve(app).await;
    (format!("http://{}/webhooks/rest/webhook", addr), recorder)
}

fn json_labelled(status: StatusCode, body: &'static str) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], body).into_response()
}

/// Dialogue webhook that always answers with `status` and a raw `body`.
pub async fn spawn_dialogue_raw(status: StatusCode, body: &'static str) -> (String, Recorder) {
    let recorder = Recorder::default();
    let app = Router::new()
        .route(
            "/webhooks/rest/webhook",
            post(
                move |State(recorder): State<Recorder>, Json(payload): Json<Value>| async move {
                    recorder.record(payload);
                    json_labelled(status, body)
                },
            ),
        )
        .with_state(recorder.clone());
    let addr = serve(app).await;
    (format!("http://{}/webhooks/rest/webhook", addr), recorder)
}

/// A URL nothing listens on.
pub async fn unreachable_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/", addr)
}

pub fn app(config: &Config) -> Router {
    create_router().with_state(Arc::new(AppState::new(config)))
}

pub fn temp_path(name: &str) -> std::path::PathBuf {
    std::env::temp_dir().join(format!("{}-{}", uuid::Uuid::new_v4(), name))
}

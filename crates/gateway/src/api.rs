//! HTTP API for the tutoring chat.
//!
//! Endpoints (nested under `/api`):
//!
//! - `POST  /api/chat`                   Stateless question → reply
//! - `GET   /api/topics`                 Topic tree and levels
//! - `POST  /api/format`                 Raw text → display segments
//! - `POST  /api/sessions`               Create a session
//! - `GET   /api/sessions/{id}`          Session with formatted transcript
//! - `PATCH /api/sessions/{id}`          Change level or topic
//! - `POST  /api/sessions/{id}/messages` Submit a question to a session

use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};
use tracing::{info, warn};

use dsamentor_core::provider::ProviderRequest;
use dsamentor_core::{CodeSample, ContentSegment, Level, Message, format};
use dsamentor_knowledge::{TOPICS, Topic};
use dsamentor_tutor::{ChatSession, Tutor};

/// Maximum number of in-memory sessions before the oldest is evicted.
pub const MAX_SESSIONS: usize = 1_000;

// ── State ─────────────────────────────────────────────────────────────────

struct SessionEntry {
    created_at: DateTime<Utc>,
    /// Held for the whole send; a second submission finds it locked.
    session: Arc<Mutex<ChatSession>>,
}

/// Shared state for the API.
pub struct ApiState {
    pub tutor: Arc<Tutor>,
    pub default_level: Level,
    sessions: RwLock<HashMap<String, SessionEntry>>,
}

impl ApiState {
    pub fn new(tutor: Arc<Tutor>, default_level: Level) -> Self {
        Self {
            tutor,
            default_level,
            sessions: RwLock::new(HashMap::new()),
        }
    }

    async fn insert_session(&self, session: ChatSession) {
        let id = session.id.to_string();
        let mut sessions = self.sessions.write().await;

        // Evict oldest if at capacity
        if sessions.len() >= MAX_SESSIONS {
            if let Some(oldest_key) = sessions
                .iter()
                .min_by_key(|(_, s)| s.created_at)
                .map(|(k, _)| k.clone())
            {
                sessions.remove(&oldest_key);
            }
        }

        sessions.insert(
            id,
            SessionEntry {
                created_at: session.created_at,
                session: Arc::new(Mutex::new(session)),
            },
        );
    }

    async fn session(&self, id: &str) -> Option<Arc<Mutex<ChatSession>>> {
        self.sessions.read().await.get(id).map(|s| s.session.clone())
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}

pub type SharedApiState = Arc<ApiState>;

// ── Router ────────────────────────────────────────────────────────────────

/// Build the API router. Nest this under "/api" in the main router.
pub fn api_router(state: SharedApiState) -> Router {
    Router::new()
        .route("/chat", post(chat_handler))
        .route("/topics", get(topics_handler))
        .route("/format", post(format_handler))
        .route("/sessions", post(create_session_handler))
        .route(
            "/sessions/{id}",
            get(get_session_handler).patch(update_session_handler),
        )
        .route("/sessions/{id}/messages", post(send_message_handler))
        .with_state(state)
}

// ── Request / Response types ──────────────────────────────────────────────

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
        }),
    )
}

/// Levels arrive as free text ("Beginner", "advanced"); absent means default.
fn parse_level(level: Option<&str>, default: Level) -> Result<Level, ApiError> {
    match level.map(str::trim).filter(|l| !l.is_empty()) {
        None => Ok(default),
        Some(l) => l
            .parse()
            .map_err(|e: dsamentor_core::level::UnknownLevel| {
                api_error(StatusCode::BAD_REQUEST, e.to_string())
            }),
    }
}

#[derive(Deserialize)]
struct ChatRequest {
    message: String,
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    topic: Option<String>,
}

#[derive(Serialize)]
struct ChatResponse {
    reply: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    code_blocks: Vec<CodeSample>,
}

#[derive(Serialize)]
struct LevelDto {
    id: &'static str,
    label: &'static str,
    description: &'static str,
}

#[derive(Serialize)]
struct TopicsResponse {
    topics: &'static [Topic],
    levels: Vec<LevelDto>,
}

#[derive(Deserialize)]
struct FormatRequest {
    text: String,
}

#[derive(Serialize)]
struct FormatResponse {
    segments: Vec<ContentSegment>,
}

#[derive(Deserialize, Default)]
struct SessionSettings {
    #[serde(default)]
    level: Option<String>,
    #[serde(default)]
    topic: Option<String>,
}

#[derive(Serialize)]
struct SessionSummaryDto {
    id: String,
    level: Level,
    topic: Option<String>,
    message_count: usize,
    created_at: String,
}

impl SessionSummaryDto {
    fn from_session(session: &ChatSession) -> Self {
        Self {
            id: session.id.to_string(),
            level: session.level,
            topic: session.topic.clone(),
            message_count: session.transcript.len(),
            created_at: session.created_at.to_rfc3339(),
        }
    }
}

#[derive(Serialize)]
struct MessageDto {
    #[serde(flatten)]
    message: Message,
    segments: Vec<ContentSegment>,
}

impl From<Message> for MessageDto {
    fn from(message: Message) -> Self {
        let segments = message.segments();
        Self { message, segments }
    }
}

#[derive(Serialize)]
struct SessionDetailResponse {
    #[serde(flatten)]
    summary: SessionSummaryDto,
    messages: Vec<MessageDto>,
}

#[derive(Deserialize)]
struct SendMessageRequest {
    message: String,
}

#[derive(Serialize)]
struct ExchangeResponse {
    user: MessageDto,
    reply: MessageDto,
}

// ── Handlers ──────────────────────────────────────────────────────────────

async fn chat_handler(
    State(state): State<SharedApiState>,
    Json(payload): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if payload.message.trim().is_empty() {
        return Err(api_error(StatusCode::BAD_REQUEST, "message must not be empty"));
    }
    let level = parse_level(payload.level.as_deref(), state.default_level)?;
    info!(level = %level, topic = ?payload.topic, "api/chat request");

    let request = ProviderRequest::new(payload.message, level, payload.topic);
    let response = state.tutor.ask(request).await.map_err(|e| {
        warn!(error = %e, "api/chat provider failure");
        api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    })?;

    Ok(Json(ChatResponse {
        reply: response.reply,
        code_blocks: response.code_blocks,
    }))
}

async fn topics_handler() -> Json<TopicsResponse> {
    Json(TopicsResponse {
        topics: TOPICS,
        levels: Level::ALL
            .iter()
            .map(|l| LevelDto {
                id: l.id(),
                label: l.label(),
                description: l.description(),
            })
            .collect(),
    })
}

async fn format_handler(Json(payload): Json<FormatRequest>) -> Json<FormatResponse> {
    Json(FormatResponse {
        segments: format(&payload.text),
    })
}

async fn create_session_handler(
    State(state): State<SharedApiState>,
    payload: Option<Json<SessionSettings>>,
) -> Result<(StatusCode, Json<SessionSummaryDto>), ApiError> {
    let settings = payload.map(|Json(s)| s).unwrap_or_default();
    let level = parse_level(settings.level.as_deref(), state.default_level)?;
    let session = ChatSession::new(level).with_topic(settings.topic);
    let summary = SessionSummaryDto::from_session(&session);

    state.insert_session(session).await;
    info!(session = %summary.id, "Session created");

    Ok((StatusCode::CREATED, Json(summary)))
}

async fn get_session_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
) -> Result<Json<SessionDetailResponse>, StatusCode> {
    let session = state.session(&id).await.ok_or(StatusCode::NOT_FOUND)?;
    let session = session.lock().await;

    Ok(Json(SessionDetailResponse {
        summary: SessionSummaryDto::from_session(&session),
        messages: session
            .transcript
            .messages()
            .iter()
            .cloned()
            .map(MessageDto::from)
            .collect(),
    }))
}

async fn update_session_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
    Json(payload): Json<SessionSettings>,
) -> Result<Json<SessionSummaryDto>, ApiError> {
    let session = state
        .session(&id)
        .await
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "session not found"))?;
    let mut session = session
        .try_lock()
        .map_err(|_| api_error(StatusCode::CONFLICT, "a reply is still being generated"))?;

    if payload.level.is_some() {
        let level = parse_level(payload.level.as_deref(), session.level)?;
        session.set_level(level);
    }
    if payload.topic.is_some() {
        session.set_topic(payload.topic);
    }

    Ok(Json(SessionSummaryDto::from_session(&session)))
}

async fn send_message_handler(
    State(state): State<SharedApiState>,
    Path(id): Path<String>,
    Json(payload): Json<SendMessageRequest>,
) -> Result<Response, ApiError> {
    let session = state
        .session(&id)
        .await
        .ok_or_else(|| api_error(StatusCode::NOT_FOUND, "session not found"))?;

    if payload.message.trim().is_empty() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    let mut session = session.try_lock().map_err(|_| {
        warn!(session = %id, "Rejected submission while a reply is in flight");
        api_error(StatusCode::CONFLICT, "a reply is still being generated")
    })?;

    match state.tutor.send(&mut session, &payload.message).await {
        Some(exchange) => Ok(Json(ExchangeResponse {
            user: exchange.user.into(),
            reply: exchange.reply.into(),
        })
        .into_response()),
        None => Ok(StatusCode::NO_CONTENT.into_response()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use std::time::Duration;
    use tower::ServiceExt;

    use dsamentor_core::error::ProviderError;
    use dsamentor_core::provider::{Provider, ProviderResponse};

    /// Lightweight mock provider for gateway tests.
    struct MockProvider {
        result: Result<String, ProviderError>,
        delay: Duration,
    }

    impl MockProvider {
        fn new(text: &str) -> Self {
            Self {
                result: Ok(text.to_string()),
                delay: Duration::ZERO,
            }
        }
    }

    #[async_trait::async_trait]
    impl Provider for MockProvider {
        fn name(&self) -> &str {
            "gateway_mock"
        }

        async fn complete(
            &self,
            request: ProviderRequest,
        ) -> Result<ProviderResponse, ProviderError> {
            tokio::time::sleep(self.delay).await;
            let text = self.result.clone()?;
            Ok(ProviderResponse {
                reply: format!("{text} [{}]", request.level),
                code_blocks: vec![CodeSample::new("Python", "stack = []")],
                model: "mock-model".into(),
            })
        }
    }

    fn state_with(provider: MockProvider) -> SharedApiState {
        let tutor = Arc::new(Tutor::new(Arc::new(provider)));
        Arc::new(ApiState::new(tutor, Level::Beginner))
    }

    fn test_state() -> SharedApiState {
        state_with(MockProvider::new("## Stack\nUse **push**"))
    }

    fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&body).unwrap()
    }

    async fn create_session(state: &SharedApiState) -> String {
        let app = api_router(state.clone());
        let resp = app
            .oneshot(json_request("POST", "/sessions", serde_json::json!({"topic": "Stack"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        body_json(resp).await["id"].as_str().unwrap().to_string()
    }

    #[tokio::test]
    async fn chat_returns_reply() {
        let app = api_router(test_state());
        let resp = app
            .oneshot(json_request(
                "POST",
                "/chat",
                serde_json::json!({"message": "Explain stack", "level": "Advanced", "topic": "Stack"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["reply"], "## Stack\nUse **push** [Advanced]");
        assert_eq!(json["code_blocks"][0]["language"], "Python");
    }

    #[tokio::test]
    async fn chat_provider_failure_is_500() {
        let app = api_router(state_with(MockProvider {
            result: Err(ProviderError::Network("down".into())),
            delay: Duration::ZERO,
        }));
        let resp = app
            .oneshot(json_request("POST", "/chat", serde_json::json!({"message": "hi"})))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(resp).await;
        assert!(json["error"].as_str().unwrap().contains("down"));
    }

    #[tokio::test]
    async fn chat_rejects_unknown_level_and_get() {
        let state = test_state();
        let resp = api_router(state.clone())
            .oneshot(json_request(
                "POST",
                "/chat",
                serde_json::json!({"message": "hi", "level": "expert"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let resp = api_router(state)
            .oneshot(Request::builder().uri("/chat").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn topics_lists_tree_and_levels() {
        let app = api_router(test_state());
        let resp = app
            .oneshot(Request::builder().uri("/topics").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["topics"].as_array().unwrap().len(), 12);
        assert_eq!(json["topics"][2]["name"], "Stack");
        assert_eq!(json["levels"][1]["label"], "Intermediate");
    }

    #[tokio::test]
    async fn format_endpoint_returns_segments() {
        let app = api_router(test_state());
        let resp = app
            .oneshot(json_request(
                "POST",
                "/format",
                serde_json::json!({"text": "### Sub\n```rust\nfn main() {}\n```"}),
            ))
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(
            json["segments"],
            serde_json::json!([
                {"type": "heading", "level": 3, "text": "Sub"},
                {"type": "code_block", "language": "rust", "code": "fn main() {}"}
            ])
        );
    }

    #[tokio::test]
    async fn session_round_trip() {
        let state = test_state();
        let id = create_session(&state).await;

        let resp = api_router(state.clone())
            .oneshot(json_request(
                "PATCH",
                &format!("/sessions/{id}"),
                serde_json::json!({"level": "intermediate"}),
            ))
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["level"], "intermediate");
        assert_eq!(json["topic"], "Stack");

        let resp = api_router(state.clone())
            .oneshot(json_request(
                "POST",
                &format!("/sessions/{id}/messages"),
                serde_json::json!({"message": "Explain stack"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
        let json = body_json(resp).await;
        assert_eq!(json["user"]["role"], "user");
        assert_eq!(json["reply"]["content"], "## Stack\nUse **push** [Intermediate]");
        assert_eq!(json["reply"]["segments"][0]["type"], "heading");
        assert_eq!(json["reply"]["segments"][2]["type"], "code_block");

        let resp = api_router(state)
            .oneshot(
                Request::builder()
                    .uri(format!("/sessions/{id}"))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let json = body_json(resp).await;
        assert_eq!(json["message_count"], 2);
        assert_eq!(json["messages"].as_array().unwrap().len(), 2);
        assert_eq!(
            json["messages"][1]["segments"][1]["spans"][1],
            serde_json::json!({"kind": "emphasis", "text": "push"})
        );
    }

    #[tokio::test]
    async fn blank_submission_is_204() {
        let state = test_state();
        let id = create_session(&state).await;
        let resp = api_router(state.clone())
            .oneshot(json_request(
                "POST",
                &format!("/sessions/{id}/messages"),
                serde_json::json!({"message": "   "}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NO_CONTENT);

        let session = state.session(&id).await.unwrap();
        assert!(session.lock().await.transcript.is_empty());
    }

    #[tokio::test]
    async fn unknown_session_is_404() {
        let resp = api_router(test_state())
            .oneshot(json_request(
                "POST",
                "/sessions/nope/messages",
                serde_json::json!({"message": "hi"}),
            ))
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn double_submission_is_409() {
        let state = state_with(MockProvider {
            result: Ok("slow".into()),
            delay: Duration::from_millis(200),
        });
        let id = create_session(&state).await;
        let uri = format!("/sessions/{id}/messages");

        let first = tokio::spawn(
            api_router(state.clone())
                .oneshot(json_request("POST", &uri, serde_json::json!({"message": "one"}))),
        );
        // Let the first request take the session lock.
        tokio::time::sleep(Duration::from_millis(50)).await;

        let second = api_router(state.clone())
            .oneshot(json_request("POST", &uri, serde_json::json!({"message": "two"})))
            .await
            .unwrap();
        assert_eq!(second.status(), StatusCode::CONFLICT);

        let first = first.await.unwrap().unwrap();
        assert_eq!(first.status(), StatusCode::OK);

        let session = state.session(&id).await.unwrap();
        assert_eq!(session.lock().await.transcript.len(), 2);
    }

    #[tokio::test]
    async fn oldest_session_is_evicted() {
        let state = test_state();
        let mut first_id = None;
        for i in 0..=MAX_SESSIONS {
            let mut session = ChatSession::default();
            session.created_at = Utc::now() + chrono::Duration::seconds(i as i64);
            if i == 0 {
                first_id = Some(session.id.to_string());
            }
            state.insert_session(session).await;
        }
        assert_eq!(state.session_count().await, MAX_SESSIONS);
        assert!(state.session(&first_id.unwrap()).await.is_none());
    }
}

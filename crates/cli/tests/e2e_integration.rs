//! End-to-end integration tests for DSA Mentor.
//!
//! These exercise the full pipeline from a learner's question to display
//! segments: provider selection, the local tutor, the session send flow,
//! and the HTTP gateway.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use dsamentor_config::AppConfig;
use dsamentor_core::error::ProviderError;
use dsamentor_core::provider::{Provider, ProviderRequest, ProviderResponse};
use dsamentor_core::{ContentSegment, InlineSpan, Level, Role};
use dsamentor_gateway::{ApiState, build_router};
use dsamentor_knowledge::ExplanationCatalog;
use dsamentor_providers::{GeminiProvider, LocalTutorProvider, build_from_config};
use dsamentor_tutor::{ChatSession, FAILURE_TEXT, Tutor};

// ── Helpers ──────────────────────────────────────────────────────────────

fn local_tutor() -> Tutor {
    let catalog = Arc::new(ExplanationCatalog::builtin());
    Tutor::new(Arc::new(LocalTutorProvider::new(catalog)))
}

/// A provider that always fails, like an unreachable remote service.
struct UnreachableProvider;

#[async_trait::async_trait]
impl Provider for UnreachableProvider {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn complete(&self, _request: ProviderRequest) -> Result<ProviderResponse, ProviderError> {
        Err(ProviderError::Network("connection refused".into()))
    }
}

fn app_with(tutor: Tutor) -> axum::Router {
    build_router(Arc::new(ApiState::new(Arc::new(tutor), Level::Beginner)), &[])
}

async fn call(app: axum::Router, method: &str, uri: &str, body: Option<serde_json::Value>) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn headings(segments: &[ContentSegment]) -> Vec<(u8, String)> {
    segments
        .iter()
        .filter_map(|s| match s {
            ContentSegment::Heading { level, text } => Some((*level, text.clone())),
            _ => None,
        })
        .collect()
}

// ── Session flow ─────────────────────────────────────────────────────────

#[tokio::test]
async fn e2e_stack_beginner_session() {
    let tutor = local_tutor();
    let mut session = ChatSession::new(Level::Beginner).with_topic(Some("Stack".into()));

    let exchange = tutor
        .send(&mut session, "Explain Stack with an example")
        .await
        .unwrap();

    let segments = exchange.reply.segments();
    assert_eq!(
        headings(&segments),
        vec![
            (2, "Stack (Beginner Level)".to_string()),
            (3, "Definition".to_string()),
            (3, "Analogy".to_string()),
            (3, "Operations".to_string()),
            (3, "Complexity".to_string()),
            (3, "Example".to_string()),
        ]
    );
    assert!(matches!(
        segments.last(),
        Some(ContentSegment::CodeBlock { language, .. }) if language == "Python"
    ));
    assert!(!segments.iter().any(|s| matches!(s, ContentSegment::BlankLine)));

    let roles: Vec<Role> = session.transcript.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::User, Role::Assistant]);
}

#[tokio::test]
async fn e2e_level_change_between_questions() {
    let tutor = local_tutor();
    let mut session = ChatSession::new(Level::Beginner);

    tutor.send(&mut session, "binary search please").await.unwrap();
    session.set_level(Level::Advanced);
    let exchange = tutor.send(&mut session, "binary search again").await.unwrap();

    assert!(exchange
        .reply
        .content
        .starts_with("## Binary Search (Advanced Level)"));
    assert_eq!(session.transcript.len(), 4);
}

#[tokio::test]
async fn e2e_quick_answer_table() {
    let tutor = local_tutor();
    let mut session = ChatSession::default();

    let exchange = tutor
        .send(&mut session, "Difference between Stack and Queue")
        .await
        .unwrap();

    let rows: Vec<(Vec<String>, bool)> = exchange
        .reply
        .segments()
        .into_iter()
        .filter_map(|s| match s {
            ContentSegment::TableRow { cells, is_header } => Some((cells, is_header)),
            _ => None,
        })
        .collect();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], (vec!["Feature".into(), "Stack".into(), "Queue".into()], true));
    assert!(rows[1..].iter().all(|(_, header)| !header));
}

#[tokio::test]
async fn e2e_quiz_for_selected_topic() {
    let tutor = local_tutor();
    let mut session = ChatSession::new(Level::Intermediate).with_topic(Some("Queue".into()));

    let exchange = tutor.send(&mut session, "Give me a quiz").await.unwrap();
    let segments = exchange.reply.segments();
    assert_eq!(headings(&segments)[0], (2, "Quiz: Queue (Intermediate)".to_string()));

    let answers = segments
        .iter()
        .filter(|s| match s {
            ContentSegment::Paragraph { spans } => spans
                .iter()
                .any(|sp| *sp == InlineSpan::Emphasis("Answer:".into())),
            _ => false,
        })
        .count();
    assert_eq!(answers, headings(&segments).len() - 1);
}

#[tokio::test]
async fn e2e_unconfigured_gemini_yields_apology() {
    let tutor = Tutor::new(Arc::new(GeminiProvider::new("")));
    let mut session = ChatSession::default();

    let exchange = tutor.send(&mut session, "What is a heap?").await.unwrap();
    assert_eq!(exchange.reply.content, FAILURE_TEXT);
    assert_eq!(session.transcript.len(), 2);
}

#[tokio::test]
async fn e2e_router_from_default_config_uses_local_tutor() {
    let config = AppConfig {
        tutor: dsamentor_config::TutorConfig {
            reply_delay_ms: 0,
            ..Default::default()
        },
        ..AppConfig::default()
    };
    let router = build_from_config(&config, Arc::new(ExplanationCatalog::builtin()));
    let tutor = Tutor::new(router.default().unwrap());
    assert_eq!(tutor.provider_name(), "local");

    let resp = tutor
        .ask(ProviderRequest::new("Explain queue", Level::Beginner, None))
        .await
        .unwrap();
    assert!(resp.reply.starts_with("## Queue (Beginner Level)"));
}

// ── HTTP gateway ─────────────────────────────────────────────────────────

#[tokio::test]
async fn e2e_gateway_session_lifecycle() {
    let app = app_with(local_tutor());

    let (status, created) = call(
        app.clone(),
        "POST",
        "/api/sessions",
        Some(serde_json::json!({"level": "Advanced", "topic": "Binary Search"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["level"], "advanced");
    let id = created["id"].as_str().unwrap().to_string();

    let (status, _) = call(
        app.clone(),
        "POST",
        &format!("/api/sessions/{id}/messages"),
        Some(serde_json::json!({"message": "  "})),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, exchange) = call(
        app.clone(),
        "POST",
        &format!("/api/sessions/{id}/messages"),
        Some(serde_json::json!({"message": "Show me the code"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        exchange["reply"]["segments"][0],
        serde_json::json!({"type": "heading", "level": 2, "text": "Binary Search (Advanced Level)"})
    );
    let segments = exchange["reply"]["segments"].as_array().unwrap();
    assert_eq!(segments.last().unwrap()["type"], "code_block");

    let (status, detail) = call(app, "GET", &format!("/api/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detail["messages"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn e2e_gateway_failure_paths() {
    let app = app_with(Tutor::new(Arc::new(UnreachableProvider)));

    let (status, body) = call(
        app.clone(),
        "POST",
        "/api/chat",
        Some(serde_json::json!({"message": "hi", "level": "Beginner"})),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("connection refused"));

    let (_, created) = call(app.clone(), "POST", "/api/sessions", Some(serde_json::json!({}))).await;
    let id = created["id"].as_str().unwrap();
    let (status, exchange) = call(
        app,
        "POST",
        &format!("/api/sessions/{id}/messages"),
        Some(serde_json::json!({"message": "hi"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exchange["reply"]["content"], FAILURE_TEXT);
}

#[tokio::test]
async fn e2e_web_ui_is_served() {
    let app = app_with(local_tutor());
    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert!(String::from_utf8_lossy(&body).contains("DSA Mentor"));
}

//! 测试用的本地后端, 记录每个请求携带的认证头

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Multipart, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{Value, json};

/// 以此前缀开头的用户名登录会被拒绝
pub const REJECTED_USER_PREFIX: &str = "rejected";

/// 拒绝登录时返回的错误体
pub fn rejected_login_body(username: &str) -> String {
    format!(r#"{{"error":"invalid credentials","user":"{}"}}"#, username)
}

/// 收到的上传字段
#[derive(Debug, Clone)]
pub struct ReceivedUpload {
    pub field: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

#[derive(Clone, Default)]
struct Recorder {
    /// 路径 -> 每次请求的 Authorization 头
    auth: Arc<Mutex<HashMap<String, Vec<Option<String>>>>>,
    uploads: Arc<Mutex<Vec<ReceivedUpload>>>,
}

impl Recorder {
    fn record(&self, path: &str, headers: &HeaderMap) {
        let value = headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        if let Ok(mut auth) = self.auth.lock() {
            auth.entry(path.to_string()).or_default().push(value);
        }
    }
}

pub struct Backend {
    pub base_url: String,
    recorder: Recorder,
}

impl Backend {
    /// 指定路径收到的所有 Authorization 头
    pub fn auth_headers(&self, path: &str) -> Vec<Option<String>> {
        self.recorder
            .auth
            .lock()
            .map(|auth| auth.get(path).cloned().unwrap_or_default())
            .unwrap_or_default()
    }

    pub fn uploads(&self) -> Vec<ReceivedUpload> {
        self.recorder
            .uploads
            .lock()
            .map(|uploads| uploads.clone())
            .unwrap_or_default()
    }
}

async fn register(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    recorder.record("/auth/register", &headers);
    let username = body["username"].as_str().unwrap_or_default();
    Json(json!({ "message": "User created", "token": format!("token-{}", username) }))
}

async fn login(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> impl IntoResponse {
    recorder.record("/auth/login", &headers);
    let username = body["username"].as_str().unwrap_or_default();
    if username.starts_with(REJECTED_USER_PREFIX) {
        return (StatusCode::UNAUTHORIZED, rejected_login_body(username)).into_response();
    }
    Json(json!({ "token": "live-token" })).into_response()
}

async fn upload(
    State(recorder): State<Recorder>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Json<Value> {
    recorder.record("/api/upload", &headers);
    while let Ok(Some(field)) = multipart.next_field().await {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await.map(|b| b.to_vec()).unwrap_or_default();
        if let Ok(mut uploads) = recorder.uploads.lock() {
            uploads.push(ReceivedUpload {
                field: name,
                file_name,
                content_type,
                bytes,
            });
        }
    }
    Json(json!({
        "status": "success",
        "result": json!({ "overall_score": 0.5 }).to_string(),
        "timestamp": "2024-03-10T12:00:00.000Z"
    }))
}

async fn status(State(recorder): State<Recorder>, headers: HeaderMap) -> Json<Value> {
    recorder.record("/api/status", &headers);
    Json(json!({ "ai_status": "running" }))
}

async fn history(State(recorder): State<Recorder>, headers: HeaderMap) -> Json<Value> {
    recorder.record("/api/history", &headers);
    Json(json!([
        { "id": "42", "result": "{\"overall_score\":0.9}", "date": "2024-03-09T12:00:00.000Z" }
    ]))
}

/// 启动一个所有请求都返回指定状态码和原始错误体的后端, 返回其基础地址
pub async fn spawn_failing(status: StatusCode, body: &'static [u8]) -> std::io::Result<String> {
    let app = Router::new().fallback(move || async move { (status, body) });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok(format!("http://{}", addr))
}

/// 在随机端口上启动测试后端
pub async fn spawn() -> std::io::Result<Backend> {
    let recorder = Recorder::default();
    let app = Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/api/upload", post(upload))
        .route("/api/status", get(status))
        .route("/api/history", get(history))
        .with_state(recorder.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    Ok(Backend {
        base_url: format!("http://{}", addr),
        recorder,
    })
}

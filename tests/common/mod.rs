//! In-process stand-in for the exercise tracker API

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone, Default)]
pub struct StubServer {
    pub inner: Arc<Mutex<StubData>>,
}

#[derive(Default)]
pub struct StubData {
    /// (id, username) in insertion order
    pub users: Vec<(i64, String)>,
    pub exercises: Vec<Value>,
    pub list_calls: usize,
    pub accept_headers: Vec<String>,
    /// When set, every route answers with this status
    pub fail_with: Option<StatusCode>,
    /// Answer new-user with 200 and a body that is not JSON
    pub garble_new_user: bool,
    /// Hold the users reply back this long
    pub users_delay: Option<Duration>,
}

impl StubServer {
    pub async fn seed_user(&self, username: &str) -> i64 {
        let mut data = self.inner.lock().await;
        let id = data.users.len() as i64 + 1;
        data.users.push((id, username.to_string()));
        id
    }

    pub async fn fail_with(&self, status: StatusCode) {
        self.inner.lock().await.fail_with = Some(status);
    }

    pub async fn garble_new_user(&self) {
        self.inner.lock().await.garble_new_user = true;
    }

    pub async fn delay_users(&self, delay: Duration) {
        self.inner.lock().await.users_delay = Some(delay);
    }
}

fn record_accept(data: &mut StubData, headers: &HeaderMap) {
    if let Some(v) = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) {
        data.accept_headers.push(v.to_string());
    }
}

async fn handle_new_user(
    State(stub): State<StubServer>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut data = stub.inner.lock().await;
    record_accept(&mut data, &headers);
    if let Some(status) = data.fail_with {
        return status.into_response();
    }

    if data.garble_new_user {
        return "not json".into_response();
    }

    let username = body["username"].as_str().unwrap_or_default().to_string();
    if data.users.iter().any(|(_, name)| *name == username) {
        return (StatusCode::CONFLICT, r#"{"message": "username already taken"}"#).into_response();
    }

    let id = data.users.len() as i64 + 1;
    data.users.push((id, username.clone()));
    Json(json!({"_id": id, "username": username})).into_response()
}

async fn handle_users(State(stub): State<StubServer>, headers: HeaderMap) -> Response {
    let delay = stub.inner.lock().await.users_delay;
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let mut data = stub.inner.lock().await;
    record_accept(&mut data, &headers);
    data.list_calls += 1;
    if let Some(status) = data.fail_with {
        return status.into_response();
    }

    if data.users.is_empty() {
        return Json(Value::Null).into_response();
    }
    let users: Vec<Value> = data
        .users
        .iter()
        .map(|(id, name)| json!({"_id": id, "username": name}))
        .collect();
    Json(users).into_response()
}

async fn handle_add(
    State(stub): State<StubServer>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    let mut data = stub.inner.lock().await;
    record_accept(&mut data, &headers);
    if let Some(status) = data.fail_with {
        return status.into_response();
    }

    data.exercises.push(body.clone());
    // Not valid JSON, like the real server's reply
    let reply = format!(
        r#"{{"description": "{}", "_id": {}, date: "today"}}"#,
        body["description"].as_str().unwrap_or_default(),
        body["userId"]
    );
    reply.into_response()
}

/// Bind the stub on an ephemeral port; returns its base URL
pub async fn spawn_stub_server() -> anyhow::Result<(String, StubServer)> {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    let stub = StubServer::default();
    let app = Router::new()
        .route("/api/exercise/new-user", post(handle_new_user))
        .route("/api/exercise/users", get(handle_users))
        .route("/api/exercise/add", post(handle_add))
        .with_state(stub.clone());
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Ok((format!("http://{addr}"), stub))
}

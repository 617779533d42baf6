#![allow(dead_code)] // shared across test binaries; not all of them use every helper

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::post;
use axum::{Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// How the canned backend answers `POST /api/research`.
#[derive(Clone)]
pub enum Respond {
    /// 200 with this JSON body.
    Ok(Value),
    /// 200 with this JSON body after the given delay.
    Slow(Duration, Value),
    /// The given non-success status with a non-JSON body.
    Status(u16),
    /// 200 with a body that is not a research result.
    Garbage,
    /// Never answers within any reasonable client timeout.
    Hang,
}

#[derive(Clone)]
struct AppState {
    respond: Arc<Mutex<Respond>>,
    received: Arc<Mutex<Vec<Value>>>,
}

/// Canned research backend bound to a free local port.
pub struct MockBackend {
    pub base_url: String,
    respond: Arc<Mutex<Respond>>,
    received: Arc<Mutex<Vec<Value>>>,
}

impl MockBackend {
    pub async fn start(respond: Respond) -> Self {
        let respond = Arc::new(Mutex::new(respond));
        let received = Arc::new(Mutex::new(Vec::new()));
        let state = AppState {
            respond: respond.clone(),
            received: received.clone(),
        };

        let app = Router::new()
            .route("/api/research", post(research))
            .with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock backend");
        let addr = listener.local_addr().expect("mock backend address");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock backend");
        });

        MockBackend {
            base_url: format!("http://{}", addr),
            respond,
            received,
        }
    }

    /// Swap the canned answer for subsequent requests.
    pub fn set_respond(&self, respond: Respond) {
        *self.respond.lock().expect("respond lock") = respond;
    }

    /// Request bodies received so far, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.received.lock().expect("received lock").clone()
    }

    /// The payload used throughout: three raw hits, one analyzed source
    /// with a marked and an unmarked bullet.
    pub fn sample_result() -> Value {
        json!({
            "query": "x",
            "search_results": [1, 2, 3],
            "sources": [{
                "title": "T",
                "url": "https://e.com",
                "summary": ["- point one", "point two"]
            }],
            "report": "R"
        })
    }
}

async fn research(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> axum::response::Response {
    state.received.lock().expect("record lock").push(body);

    let respond = state.respond.lock().expect("respond lock").clone();
    match respond {
        Respond::Ok(value) => Json(value).into_response(),
        Respond::Slow(delay, value) => {
            tokio::time::sleep(delay).await;
            Json(value).into_response()
        }
        Respond::Status(code) => {
            let status = StatusCode::from_u16(code).expect("status code");
            (status, "research failed").into_response()
        }
        Respond::Garbage => (StatusCode::OK, "not a research result").into_response(),
        Respond::Hang => {
            tokio::time::sleep(Duration::from_secs(30)).await;
            Json(json!({})).into_response()
        }
    }
}

//! In-process HTTP stand-ins for the quote endpoint and the Twilio API.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

/// Serve `app` on an ephemeral localhost port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL on which nothing is listening.
pub async fn closed_base_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn quote_route(status: StatusCode, body: &'static str) -> Router {
    Router::new().route(
        "/api/random",
        get(move || async move { (status, [("content-type", "application/json")], body) }),
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentMessage {
    pub account_sid: String,
    pub to: String,
    pub messaging_service_sid: String,
    pub body: String,
    pub authorization: Option<String>,
}

/// Fake Twilio Messages endpoint. Any `To` listed in `reject` gets a 400.
#[derive(Clone, Default)]
pub struct FakeTwilio {
    pub sent: Arc<Mutex<Vec<SentMessage>>>,
    pub reject: Arc<Vec<String>>,
}

impl FakeTwilio {
    pub fn rejecting(numbers: &[&str]) -> Self {
        Self {
            sent: Arc::default(),
            reject: Arc::new(numbers.iter().map(|n| n.to_string()).collect()),
        }
    }

    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap().clone()
    }

    pub fn router(&self) -> Router {
        Router::new()
            .route(
                "/2010-04-01/Accounts/:account_sid/Messages.json",
                post(create_message),
            )
            .with_state(self.clone())
    }
}

async fn create_message(
    State(fake): State<FakeTwilio>,
    Path(account_sid): Path<String>,
    headers: axum::http::HeaderMap,
    Form(form): Form<HashMap<String, String>>,
) -> impl IntoResponse {
    let field = |name: &str| form.get(name).cloned().unwrap_or_default();
    let to = field("To");
    fake.sent.lock().unwrap().push(SentMessage {
        account_sid,
        to: to.clone(),
        messaging_service_sid: field("MessagingServiceSid"),
        body: field("Body"),
        authorization: headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
    });

    if to.is_empty() || fake.reject.contains(&to) {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({
                "code": 21211,
                "message": format!("The 'To' number {} is not a valid phone number.", to),
                "more_info": "https://www.twilio.com/docs/errors/21211",
                "status": 400
            })),
        );
    }

    let n = fake.sent.lock().unwrap().len();
    (
        StatusCode::CREATED,
        Json(json!({
            "sid": format!("SM{:032}", n),
            "status": "accepted",
            "to": to,
        })),
    )
}

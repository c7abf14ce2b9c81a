use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{HeaderValue, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Router;
use tokio::net::TcpListener;

/// Scripted reply served for every request
struct Reply {
    status: StatusCode,
    headers: Vec<(&'static str, &'static str)>,
    body: String,
}

type Seen = Arc<Mutex<Vec<String>>>;

/// Local stand-in for The Odds API that records every path+query it receives
pub struct MockUpstream {
    pub base_url: String,
    seen: Seen,
}

impl MockUpstream {
    pub async fn start(status: u16, headers: &[(&'static str, &'static str)], body: &str) -> Self {
        let seen: Seen = Arc::new(Mutex::new(Vec::new()));
        let reply = Reply {
            status: StatusCode::from_u16(status).unwrap(),
            headers: headers.to_vec(),
            body: body.to_string(),
        };

        let app = Router::new()
            .fallback(record)
            .with_state((Arc::clone(&seen), Arc::new(reply)));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url: format!("http://{}/v4", addr),
            seen,
        }
    }

    /// Base URL of a port nothing listens on
    pub async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/v4", addr)
    }

    pub fn requests(&self) -> Vec<String> {
        self.seen.lock().unwrap().clone()
    }
}

/// HTTP client that ignores any proxy configured in the environment
pub fn local_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

async fn record(State((seen, reply)): State<(Seen, Arc<Reply>)>, uri: Uri) -> Response {
    seen.lock().unwrap().push(uri.to_string());

    let mut response = (reply.status, reply.body.clone()).into_response();
    for (name, value) in &reply.headers {
        response
            .headers_mut()
            .insert(*name, HeaderValue::from_static(*value));
    }
    response
}

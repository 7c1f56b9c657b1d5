#![allow(dead_code)]

use axum::{
    http::{header::CONTENT_TYPE, HeaderMap, Method, Uri},
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;

use codereview::config::ServerConfig;
use codereview::server::{serve_on, AppState};
use codereview::{ApiClient, Services};

/// Describes the request it received instead of serving real data
async fn echo(method: Method, uri: Uri, headers: HeaderMap, body: String) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "query": uri.query(),
        "content_type": headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok()),
        "body": body,
    }))
}

/// Start an echo server and return services pointed at its `/api/v1`
pub async fn echo_services() -> Services {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(echo);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    services_for(addr)
}

/// A running development server; stops when dropped
pub struct DevServer {
    pub addr: SocketAddr,
    _shutdown: oneshot::Sender<()>,
}

impl DevServer {
    pub async fn start() -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel::<()>();

        tokio::spawn(async move {
            let shutdown = async {
                let _ = rx.await;
            };
            serve_on(listener, AppState::new(ServerConfig::default()), shutdown)
                .await
                .unwrap();
        });

        Self {
            addr,
            _shutdown: tx,
        }
    }

    pub fn services(&self) -> Services {
        services_for(self.addr)
    }
}

fn services_for(addr: SocketAddr) -> Services {
    let client = ApiClient::with_base_url(&format!("http://{}/api/v1", addr)).unwrap();
    Services::new(client)
}

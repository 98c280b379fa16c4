#![allow(dead_code)]

use std::sync::{Arc, Once};

use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use workout_gateway::api::{create_routes, AppState};
use workout_gateway::config::AppConfig;
use workout_gateway::models::Catalog;

pub const INDEX_HTML: &str = "<!doctype html><html><body><div id=\"root\">workout-gateway-frontend</div></body></html>";
pub const APP_JS: &str = "console.log('bundle');";

static INIT: Once = Once::new();

/// Initialize test logging
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("debug")
            .with_test_writer()
            .try_init();
    });
}

/// Router wired to a temporary front-end bundle and the given recommendation service
pub struct TestApp {
    pub router: Router,
    pub catalog: Arc<Catalog>,
    _frontend: TempDir,
}

impl TestApp {
    pub fn new(recommender_url: &str) -> Self {
        init_test_logging();

        let frontend = tempfile::tempdir().expect("Failed to create front-end dir");
        std::fs::write(frontend.path().join("index.html"), INDEX_HTML).unwrap();
        std::fs::create_dir(frontend.path().join("static")).unwrap();
        std::fs::write(frontend.path().join("static").join("app.js"), APP_JS).unwrap();

        let config = AppConfig {
            recommender_url: recommender_url.to_string(),
            frontend_dir: frontend.path().to_path_buf(),
            ..AppConfig::default()
        };

        let catalog = Arc::new(Catalog::embedded().expect("Failed to load catalog"));
        let state = AppState::new(catalog.clone(), &config).expect("Failed to build app state");

        Self {
            router: create_routes(state, &config),
            catalog,
            _frontend: frontend,
        }
    }

    /// POST a JSON body and decode the JSON response
    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let (status, _, bytes) = self.send(request).await;
        (status, serde_json::from_slice(&bytes).expect("Response was not JSON"))
    }

    /// POST a raw body with a JSON content type
    pub async fn post_raw(&self, uri: &str, body: &str) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        let (status, _, bytes) = self.send(request).await;
        (status, serde_json::from_slice(&bytes).expect("Response was not JSON"))
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, HeaderMap, Vec<u8>) {
        let request = Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, _, bytes) = self.get(uri).await;
        (status, serde_json::from_slice(&bytes).expect("Response was not JSON"))
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Vec<u8>) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        (status, headers, bytes.to_vec())
    }
}

/// Base URL of a local port with nothing listening on it
pub fn unreachable_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let address = listener.local_addr().unwrap();
    drop(listener);

    format!("http://{}", address)
}

//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use muse_inspire::catalog::{CuratedCatalog, QuoteCatalog};
use muse_inspire::config::Config;
use muse_inspire::design::Quote;
use muse_inspire::server::{build_router, AppState};
use muse_inspire::session::{DesignStore, LifecycleController};
use tempfile::TempDir;
use tower::ServiceExt;

/// A curated quote by id; panics if the catalog lacks it.
pub fn curated(id: &str) -> Quote {
    CuratedCatalog::new()
        .lookup(id)
        .unwrap_or_else(|| panic!("{id} should be curated"))
}

pub fn controller() -> LifecycleController {
    LifecycleController::new(DesignStore::new(), Arc::new(CuratedCatalog::new()))
}

/// Config with an instant generator so router tests don't wait.
pub fn fast_config() -> Config {
    let mut config = Config::default();
    config.generation.delay_ms = 0;
    config
}

pub fn app_state() -> AppState {
    AppState::new(&fast_config())
}

/// Write `content` to a config file in a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

/// Send one request through a router built over `state`.
pub async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("valid request");

    build_router(state.clone())
        .oneshot(request)
        .await
        .expect("router is infallible")
}

/// Status and parsed JSON body.
pub async fn send_json(
    state: &AppState,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let response = send(state, method, uri, body).await;
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body collects")
        .to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

//! Common test utilities for integration tests
//!
//! This module provides an in-memory application for driving the router.

#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use bmi_backend::{config::AppConfig, routes, state::AppState};
use bmi_shared::BmiCalculator;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

/// Test application wrapper
pub struct TestApp {
    pub app: Router,
}

impl TestApp {
    /// Create a new test application with default configuration
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    /// Create a test application with a custom configuration
    pub fn with_config(config: AppConfig) -> Self {
        let app = routes::create_router(AppState::new(config));
        Self { app }
    }

    /// Create a test application around a substitute calculator
    pub fn with_calculator(calculator: Arc<dyn BmiCalculator>) -> Self {
        let app = routes::create_router(AppState::with_calculator(test_config(), calculator));
        Self { app }
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("GET")
            .uri(path)
            .body(Body::empty())
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request with JSON body
    pub async fn post(&self, path: &str, body: &str) -> (StatusCode, String) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Make a POST request and decode the JSON response
    pub async fn post_json(&self, path: &str, body: &Value) -> (StatusCode, Value) {
        let (status, body) = self.post(path, &body.to_string()).await;
        let body = serde_json::from_str(&body).unwrap();
        (status, body)
    }

    async fn send(&self, request: Request<Body>) -> (StatusCode, String) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body_str = String::from_utf8(body.to_vec()).unwrap();

        (status, body_str)
    }
}

fn test_config() -> AppConfig {
    let mut config = AppConfig::default();
    config.server.port = 0;
    config
}

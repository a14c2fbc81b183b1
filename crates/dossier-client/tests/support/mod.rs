#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dossier_client::ApiClient;
use dossier_config::{DossierConfig, PollingConfig, ServerConfig};
use serde_json::{Value, json};
use wiremock::{MockServer, Request, Respond, ResponseTemplate};

pub const TOKEN: &str = "tok-123";

/// Config pointing at the mock server, with millisecond polling.
pub fn config(server: &MockServer) -> DossierConfig {
    DossierConfig {
        server: ServerConfig {
            base_url: server.uri(),
            request_timeout_secs: 5,
            ..ServerConfig::default()
        },
        polling: PollingConfig {
            status_interval_ms: 5,
            report_interval_ms: 5,
            max_interval_ms: 20,
            backoff_factor: 2,
            timeout_secs: 5,
        },
        ..DossierConfig::default()
    }
}

pub fn client(server: &MockServer) -> ApiClient {
    ApiClient::new(&config(server).server, Some(TOKEN.to_string())).unwrap()
}

pub fn status_body(status: &str) -> Value {
    json!({ "status": status })
}

pub fn summary(id: u64, query_id: u64, title: &str) -> Value {
    json!({
        "id": id,
        "query_id": query_id,
        "title": title,
        "question": format!("question for {title}"),
        "created_at": "2025-03-01T12:30:00.123456"
    })
}

pub fn report_body(title: &str) -> Value {
    json!({
        "title": title,
        "question": "Can metformin be repurposed?",
        "report_text": "## Executive Summary\n\nText.",
        "created_at": "2025-03-01T12:30:00"
    })
}

/// Replays `responses` in order, repeating the last one.
pub struct Sequence {
    calls: Arc<AtomicUsize>,
    responses: Vec<ResponseTemplate>,
}

impl Sequence {
    pub fn new(responses: Vec<ResponseTemplate>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                calls: Arc::clone(&calls),
                responses,
            },
            calls,
        )
    }
}

impl Respond for Sequence {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let n = self.calls.fetch_add(1, Ordering::SeqCst);
        self.responses[n.min(self.responses.len() - 1)].clone()
    }
}

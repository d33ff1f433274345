//! In-memory transport that serves canned payloads for integration tests.
//!
//! Responses are keyed by `host + path`; every request is recorded so tests
//! can assert on what would have gone over the wire.

use std::collections::HashMap;
use std::sync::Mutex;

use graphload_core::{SafeRequest, Transport};

#[derive(Debug, Default)]
pub struct FakeWiki {
    responses: HashMap<String, String>,
    requests: Mutex<Vec<SafeRequest>>,
}

impl FakeWiki {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` for requests to `host` + `path` (query ignored).
    pub fn serve(mut self, host: &str, path: &str, body: &str) -> Self {
        self.responses
            .insert(format!("{host}{path}"), body.to_string());
        self
    }

    pub fn requests(&self) -> Vec<SafeRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Transport for FakeWiki {
    fn fetch(&self, request: &SafeRequest) -> anyhow::Result<String> {
        self.requests.lock().unwrap().push(request.clone());
        let key = format!("{}{}", request.host, request.pathname);
        self.responses
            .get(&key)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("404 for {}", request.url))
    }
}

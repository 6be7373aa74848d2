//! Mock LLM provider for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};

#[derive(Debug, Clone)]
enum Reply {
    Text(String),
    Fail(String),
}

#[derive(Debug, Clone)]
struct Route {
    /// Substring looked for in the system prompt
    needle: String,
    reply: Reply,
    latency: Option<Duration>,
}

/// A mock LLM provider that returns predefined responses
///
/// Replies are chosen by the first route whose needle occurs in the request's
/// system prompt; requests matching no route cycle through the canned
/// responses. Every request is recorded for later inspection.
#[derive(Debug)]
pub struct MockProvider {
    /// Name of this mock
    pub name: String,
    /// Canned responses (cycles through them)
    responses: Vec<String>,
    /// Current response index
    index: AtomicUsize,
    /// Prompt-routed replies, checked in insertion order
    routes: Vec<Route>,
    /// Simulated latency for replies without their own
    latency: Duration,
    /// Every request received, in arrival order
    requests: Mutex<Vec<LlmRequest>>,
}

impl MockProvider {
    /// Create a new mock provider with given responses
    pub fn new(responses: Vec<String>) -> Self {
        Self {
            name: "mock".to_string(),
            responses,
            index: AtomicUsize::new(0),
            routes: Vec::new(),
            latency: Duration::from_millis(50),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that always returns the same response
    pub fn constant(response: &str) -> Self {
        Self::new(vec![response.to_string()])
    }

    /// Create a mock that only answers through routes
    pub fn routed() -> Self {
        Self::new(Vec::new())
    }

    /// Set the default simulated latency
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    /// Reply with `response` when the system prompt contains `needle`
    pub fn route(mut self, needle: &str, response: &str) -> Self {
        self.routes.push(Route {
            needle: needle.to_string(),
            reply: Reply::Text(response.to_string()),
            latency: None,
        });
        self
    }

    /// Like [`route`](Self::route), with its own simulated latency
    pub fn route_with_latency(mut self, needle: &str, response: &str, latency: Duration) -> Self {
        self.routes.push(Route {
            needle: needle.to_string(),
            reply: Reply::Text(response.to_string()),
            latency: Some(latency),
        });
        self
    }

    /// Fail with [`LlmError::RequestFailed`] when the system prompt contains `needle`
    pub fn fail_on(mut self, needle: &str, message: &str) -> Self {
        self.routes.push(Route {
            needle: needle.to_string(),
            reply: Reply::Fail(message.to_string()),
            latency: None,
        });
        self
    }

    /// Requests received so far
    pub fn requests(&self) -> Vec<LlmRequest> {
        self.requests
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().map(|r| r.len()).unwrap_or(0)
    }

    fn pick(&self, request: &LlmRequest) -> (Reply, Duration) {
        if let Some(route) = self
            .routes
            .iter()
            .find(|r| request.system.contains(&r.needle))
        {
            return (route.reply.clone(), route.latency.unwrap_or(self.latency));
        }

        if self.responses.is_empty() {
            return (
                Reply::Fail(format!(
                    "no mock route for system prompt: {:.60}",
                    request.system
                )),
                self.latency,
            );
        }

        let idx = self.index.fetch_add(1, Ordering::Relaxed);
        (
            Reply::Text(self.responses[idx % self.responses.len()].clone()),
            self.latency,
        )
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    fn name(&self) -> &str {
        &self.name
    }

    async fn is_available(&self) -> bool {
        true // Mock is always available
    }

    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let start = Instant::now();

        if let Ok(mut log) = self.requests.lock() {
            log.push(request.clone());
        }
        let (reply, latency) = self.pick(&request);

        // Simulate latency
        tokio::time::sleep(latency).await;

        let content = match reply {
            Reply::Text(text) => text,
            Reply::Fail(message) => return Err(LlmError::RequestFailed(message)),
        };

        Ok(LlmResponse {
            content,
            model: request.model.unwrap_or_else(|| self.name.clone()),
            tokens_used: Some((request.prompt.len() / 4) as u32 + 100),
            latency_ms: start.elapsed().as_millis() as u64,
        })
    }
}

//! Async adapter for synchronous chat-completion clients
//!
//! A [`BlockingProvider`] performs its request on the calling thread. Wrapping
//! it in [`Offloaded`] gives an [`LlmProvider`] whose every call runs on tokio's
//! blocking pool, so two concurrent calls overlap instead of one stalling the
//! executor thread that polls the other.

use async_trait::async_trait;
use std::sync::Arc;

use crate::provider::{LlmError, LlmProvider, LlmRequest, LlmResponse};

/// A chat-completion client whose calls block the current thread
pub trait BlockingProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Get the provider name
    fn name(&self) -> &str;

    /// Generate a completion, blocking until the reply arrives
    fn complete_blocking(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

/// Runs a [`BlockingProvider`] off the async executor
#[derive(Debug)]
pub struct Offloaded<P: BlockingProvider> {
    inner: Arc<P>,
}

impl<P: BlockingProvider> Offloaded<P> {
    pub fn new(provider: P) -> Self {
        Self {
            inner: Arc::new(provider),
        }
    }

    /// Access the wrapped provider
    pub fn inner(&self) -> &P {
        &self.inner
    }
}

#[async_trait]
impl<P: BlockingProvider> LlmProvider for Offloaded<P> {
    fn name(&self) -> &str {
        self.inner.name()
    }

    async fn is_available(&self) -> bool {
        true
    }

    async fn complete(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let inner = Arc::clone(&self.inner);
        tokio::task::spawn_blocking(move || inner.complete_blocking(request))
            .await
            .map_err(|e| LlmError::TaskFailed(e.to_string()))?
    }
}

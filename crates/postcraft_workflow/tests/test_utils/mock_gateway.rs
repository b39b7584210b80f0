//! Scripted model gateway for testing.

use async_trait::async_trait;
use postcraft_core::ChatMessage;
use postcraft_error::{GatewayError, GatewayErrorKind};
use postcraft_interface::ModelGateway;
use std::sync::Mutex;

/// A single scripted reply.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Raw completion text
    Text(String),
    /// Gateway failure
    Error(GatewayErrorKind),
}

/// Gateway that replays a fixed sequence of replies.
///
/// Records every call so tests can assert on the model and prompt used.
pub struct MockGateway {
    responses: Vec<MockResponse>,
    calls: Mutex<Vec<(String, Vec<ChatMessage>)>>,
}

impl MockGateway {
    /// Replay `responses` in order.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self {
            responses,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Reply once with `text`.
    pub fn new_text(text: impl Into<String>) -> Self {
        Self::new_sequence(vec![MockResponse::Text(text.into())])
    }

    /// Fail once with `error`.
    pub fn new_error(error: GatewayErrorKind) -> Self {
        Self::new_sequence(vec![MockResponse::Error(error)])
    }

    /// Number of invocations so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    /// Model identifier of each invocation.
    #[allow(dead_code)]
    pub fn models(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(model, _)| model.clone())
            .collect()
    }

    /// Messages of the most recent invocation.
    #[allow(dead_code)]
    pub fn last_messages(&self) -> Option<Vec<ChatMessage>> {
        self.calls
            .lock()
            .unwrap()
            .last()
            .map(|(_, messages)| messages.clone())
    }
}

#[async_trait]
impl ModelGateway for MockGateway {
    async fn invoke(&self, messages: &[ChatMessage], model: &str) -> Result<String, GatewayError> {
        let mut calls = self.calls.lock().unwrap();
        let index = calls.len();
        calls.push((model.to_string(), messages.to_vec()));

        match self.responses.get(index) {
            Some(MockResponse::Text(text)) => Ok(text.clone()),
            Some(MockResponse::Error(kind)) => Err(GatewayError::new(kind.clone())),
            None => Err(GatewayError::new(GatewayErrorKind::Transport {
                message: format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    index + 1,
                    self.responses.len()
                ),
                status: None,
                body: None,
            })),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock"
    }
}

//! Mock text generator for testing
//!
//! Returns a canned response, an empty string, or an error, without
//! making network calls. Every prompt it receives is recorded.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::{ClientError, TextGenerator};

pub struct MockGenerator {
    response: Result<String, String>,
    prompts: Mutex<Vec<String>>,
}

impl MockGenerator {
    /// Create a mock that answers every prompt with `response`
    pub fn with_response(response: &str) -> Self {
        Self {
            response: Ok(response.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Create a mock that answers with empty text
    pub fn empty() -> Self {
        Self::with_response("")
    }

    /// Create a mock that always fails with an error
    pub fn with_failure(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts received so far
    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|p| p.clone())
            .unwrap_or_default()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn complete(&self, prompt: &str) -> Result<String, ClientError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        self.response.clone().map_err(ClientError::Mock)
    }
}

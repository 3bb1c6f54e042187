use async_trait::async_trait;

use framesight_core::{FramesightError, VisionProvider, VisionRequest, VisionResponse};

/// A mock vision provider that returns canned responses.
#[derive(Default)]
pub struct MockProvider {
    fixed_response: Option<String>,
    fail_with: Option<String>,
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.fixed_response = Some(response.into());
        self
    }

    /// Make every describe call fail with the given message.
    pub fn failing(mut self, message: impl Into<String>) -> Self {
        self.fail_with = Some(message.into());
        self
    }
}

#[async_trait]
impl VisionProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    async fn describe(&self, _request: &VisionRequest) -> Result<VisionResponse, FramesightError> {
        if let Some(message) = &self.fail_with {
            return Err(FramesightError::VisionError {
                provider: "mock".to_string(),
                message: message.clone(),
            });
        }
        Ok(VisionResponse {
            text: self
                .fixed_response
                .clone()
                .unwrap_or_else(|| "Mock response".to_string()),
        })
    }
}

use async_trait::async_trait;

use crate::error::FramesightError;

/// One base64-encoded frame image, ready for transport.
#[derive(Debug, Clone)]
pub struct EncodedImage {
    pub mime_type: String,
    /// Standard base64 text encoding of the image bytes.
    pub data: String,
}

/// A single inference request: prompt plus the ordered frame images.
#[derive(Debug, Clone)]
pub struct VisionRequest {
    pub model: String,
    pub prompt: String,
    pub images: Vec<EncodedImage>,
}

/// Response from a vision provider.
#[derive(Debug, Clone)]
pub struct VisionResponse {
    pub text: String,
}

/// Trait for multimodal inference providers.
#[async_trait]
pub trait VisionProvider: Send + Sync {
    /// Provider name (e.g., "gemini").
    fn name(&self) -> &str;

    /// Send one describe request and return the generated text.
    ///
    /// One outstanding request per call; failures are propagated verbatim,
    /// with no retry and no partial results.
    async fn describe(&self, request: &VisionRequest) -> Result<VisionResponse, FramesightError>;
}

//! Analysis orchestration: extract, encode, one provider round-trip.

use std::path::Path;
use std::time::Instant;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, info};

use framesight_core::{
    Analysis, EncodedImage, FramesightError, VideoReference, VisionProvider, VisionRequest,
};
use framesight_extract::FrameExtractor;

use crate::cost;
use crate::mime::image_mime_type;

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Runs the linear extract -> encode -> describe pipeline.
pub struct VideoAnalyzer<P> {
    provider: P,
    extractor: FrameExtractor,
    model: String,
}

impl<P: VisionProvider> VideoAnalyzer<P> {
    pub fn new(provider: P) -> Self {
        Self {
            provider,
            extractor: FrameExtractor::new(),
            model: DEFAULT_MODEL.to_string(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_extractor(mut self, extractor: FrameExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    /// Analyze one video: extract frames, send them with the prompt in a
    /// single request, and return the provider's text verbatim together
    /// with advisory cost metrics.
    ///
    /// Extraction and provider failures propagate immediately; there is no
    /// retry and no partial result.
    pub async fn analyze(
        &self,
        reference: &VideoReference,
        prompt: &str,
        output_dir: Option<&Path>,
    ) -> Result<Analysis, FramesightError> {
        let frames = self.extractor.extract(reference, output_dir).await?;

        let mut images = Vec::with_capacity(frames.len());
        let mut input_tokens = 0u64;
        for frame in &frames {
            let bytes = tokio::fs::read(&frame.path).await?;
            input_tokens += cost::image_tokens(bytes.len());
            images.push(EncodedImage {
                mime_type: image_mime_type(&frame.path).to_string(),
                data: STANDARD.encode(&bytes),
            });
        }
        input_tokens += cost::text_tokens(prompt.chars().count());

        info!(
            frames = frames.len(),
            provider = self.provider.name(),
            model = %self.model,
            "Sending frames for analysis"
        );

        let request = VisionRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            images,
        };
        let started = Instant::now();
        let response = self.provider.describe(&request).await?;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        let output_tokens = cost::text_tokens(response.text.chars().count());
        let report = cost::report(input_tokens, output_tokens, elapsed_ms);
        debug!(input_tokens, output_tokens, elapsed_ms, "Analysis round-trip complete");

        Ok(Analysis {
            text: response.text,
            frames_sent: frames.len(),
            cost: report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockProvider;

    fn sample_source() -> tempfile::NamedTempFile {
        tempfile::NamedTempFile::new().unwrap()
    }

    #[tokio::test]
    async fn returns_provider_text_with_metrics() {
        let source = sample_source();
        let frames_dir = tempfile::tempdir().unwrap();
        std::fs::write(frames_dir.path().join("frame_0001.jpg"), vec![0u8; 11 * 1024]).unwrap();
        std::fs::write(frames_dir.path().join("frame_0002.jpg"), vec![0u8; 2 * 1024]).unwrap();

        let reference = VideoReference::parse(source.path().to_str().unwrap());
        let analyzer = VideoAnalyzer::new(MockProvider::new().with_response("two frames of a street"))
            .with_extractor(FrameExtractor::new().with_ffmpeg_bin("true"));

        let analysis = analyzer
            .analyze(&reference, "what do you see", Some(frames_dir.path()))
            .await
            .unwrap();

        assert_eq!(analysis.text, "two frames of a street");
        assert_eq!(analysis.frames_sent, 2);
        // 11 KiB -> 2 tokens, 2 KiB -> 1 token, 15-char prompt -> 4 tokens.
        assert_eq!(analysis.cost.input_tokens, 2 + 1 + 4);
        assert!(analysis.cost.output_tokens > 0);
        assert!(analysis.cost.total_cost > 0.0);
    }

    #[tokio::test]
    async fn extraction_failure_propagates_before_any_provider_call() {
        let source = sample_source();
        let frames_dir = tempfile::tempdir().unwrap();
        let reference = VideoReference::parse(source.path().to_str().unwrap());

        let analyzer = VideoAnalyzer::new(MockProvider::new().failing("provider must not be called"))
            .with_extractor(FrameExtractor::new().with_ffmpeg_bin("false"));

        let err = analyzer
            .analyze(&reference, "prompt", Some(frames_dir.path()))
            .await
            .unwrap_err();
        assert!(matches!(err, FramesightError::DecoderFailed { .. }));
    }

    #[tokio::test]
    async fn provider_failure_propagates_verbatim() {
        let source = sample_source();
        let frames_dir = tempfile::tempdir().unwrap();
        std::fs::write(frames_dir.path().join("frame_0001.jpg"), b"jpeg bytes").unwrap();
        let reference = VideoReference::parse(source.path().to_str().unwrap());

        let analyzer = VideoAnalyzer::new(MockProvider::new().failing("quota exceeded"))
            .with_extractor(FrameExtractor::new().with_ffmpeg_bin("true"));

        let err = analyzer
            .analyze(&reference, "prompt", Some(frames_dir.path()))
            .await
            .unwrap_err();
        match err {
            FramesightError::VisionError { message, .. } => {
                assert_eq!(message, "quota exceeded");
            }
            other => panic!("expected VisionError, got {other:?}"),
        }
    }
}

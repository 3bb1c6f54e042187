//! Vision analysis: provider implementations and the orchestrator.

pub mod analyzer;
pub mod cost;
pub mod gemini;
pub mod mime;
pub mod mock;

pub use analyzer::{VideoAnalyzer, DEFAULT_MODEL};
pub use gemini::GeminiProvider;
pub use mock::MockProvider;

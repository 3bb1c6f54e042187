use std::path::PathBuf;
use std::process::ExitStatus;

use thiserror::Error;

/// Top-level error type for the Framesight pipeline.
#[derive(Debug, Error)]
pub enum FramesightError {
    #[error("video file not found: {}", .0.display())]
    SourceMissing(PathBuf),

    #[error("frame decoder unavailable: {0}")]
    DecoderUnavailable(String),

    #[error("frame decoder failed ({status}): {stderr}")]
    DecoderFailed { status: ExitStatus, stderr: String },

    #[error("vision provider error ({provider}): {message}")]
    VisionError { provider: String, message: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

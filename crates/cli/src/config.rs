use std::path::PathBuf;

use crate::cache::DEFAULT_CACHE_DIR;

/// Framesight runtime configuration, read once at process start and passed
/// by reference into the pipeline. Core logic never reads the environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key; required only when an analysis prompt is given.
    pub gemini_api_key: Option<String>,
    /// Directory holding `<hash>.processed` markers.
    pub cache_dir: PathBuf,
    /// Decoder binary name or path.
    pub ffmpeg_bin: String,
    /// Log filter used when RUST_LOG is unset.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            cache_dir: PathBuf::from(DEFAULT_CACHE_DIR),
            ffmpeg_bin: "ffmpeg".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables with sensible defaults.
    pub fn from_env() -> Self {
        Self {
            gemini_api_key: std::env::var("GEMINI_API_KEY").ok(),
            cache_dir: std::env::var("FRAMESIGHT_CACHE_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CACHE_DIR)),
            ffmpeg_bin: std::env::var("FRAMESIGHT_FFMPEG")
                .unwrap_or_else(|_| "ffmpeg".to_string()),
            log_level: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        }
    }
}

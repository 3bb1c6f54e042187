use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One extracted still image on disk.
///
/// Frames are owned by the directory that holds them; nothing in the
/// pipeline deletes them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frame {
    pub path: PathBuf,
}

impl Frame {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File name of the frame image.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("")
    }
}

/// Advisory token/cost metrics for one analysis run.
///
/// Linear approximations for operator visibility only. Never authoritative,
/// never used for control flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostReport {
    pub input_tokens: u64,
    pub output_tokens: u64,
    pub input_cost: f64,
    pub output_cost: f64,
    pub total_cost: f64,
    pub elapsed_ms: u64,
}

/// Result of analyzing one video: the provider's text plus advisory metrics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Analysis {
    /// Text returned by the vision provider, verbatim.
    pub text: String,
    /// Number of frames sent with the prompt.
    pub frames_sent: usize,
    pub cost: CostReport,
}

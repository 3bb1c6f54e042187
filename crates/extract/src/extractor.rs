//! Frame extraction via the external decoder process.
//!
//! The decoder runs as a separate OS process; the caller suspends on it
//! exactly once and receives either the full ordered frame sequence or a
//! typed failure carrying the exit status.

use std::path::{Path, PathBuf};
use std::process::Stdio;

use tokio::process::Command;
use tracing::{debug, info};
use uuid::Uuid;

use framesight_core::{Frame, FramesightError, VideoReference};

use crate::filter::build_filter;

/// Prefix of generated frame file names.
pub const FRAME_PREFIX: &str = "frame_";
/// Extension of generated frame files.
pub const FRAME_EXT: &str = ".jpg";

/// Output file name pattern handed to the decoder (4-digit zero-padded
/// sequence number, so lexicographic order equals temporal order).
const FRAME_PATTERN: &str = "frame_%04d.jpg";

/// How much decoder stderr to carry in a failure.
const STDERR_TAIL: usize = 2048;

/// Invokes the external decoder to produce a numbered frame sequence.
pub struct FrameExtractor {
    ffmpeg_bin: String,
}

impl Default for FrameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameExtractor {
    pub fn new() -> Self {
        Self {
            ffmpeg_bin: "ffmpeg".to_string(),
        }
    }

    /// Override the decoder binary name or path.
    pub fn with_ffmpeg_bin(mut self, bin: impl Into<String>) -> Self {
        self.ffmpeg_bin = bin.into();
        self
    }

    /// Extract frames for `reference` into `output_dir` (created if
    /// missing) or into a fresh uniquely-named temporary directory.
    ///
    /// Returns the produced frames in lexicographic order; an empty
    /// sequence is a valid result. A non-zero decoder exit is fatal and
    /// never yields a partial sequence, even if some frames were written.
    /// Directories and frame files are created but never deleted here.
    pub async fn extract(
        &self,
        reference: &VideoReference,
        output_dir: Option<&Path>,
    ) -> Result<Vec<Frame>, FramesightError> {
        if !tokio::fs::try_exists(&reference.path).await.unwrap_or(false) {
            return Err(FramesightError::SourceMissing(reference.path.clone()));
        }

        let frames_dir = resolve_output_dir(output_dir).await?;
        let pattern = frames_dir.join(FRAME_PATTERN);
        let filter = build_filter(&reference.options, reference.file_name());

        info!(
            video = %reference.path.display(),
            fps = reference.options.fps,
            timestamps = reference.options.timestamps,
            "Extracting frames"
        );
        debug!(
            bin = %self.ffmpeg_bin,
            filter = %filter,
            pattern = %pattern.display(),
            "Decoder invocation"
        );

        let output = Command::new(&self.ffmpeg_bin)
            .arg("-i")
            .arg(&reference.path)
            .arg("-vf")
            .arg(&filter)
            .arg("-q:v")
            .arg("2") // decoder's high-quality setting
            .arg(&pattern)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|err| {
                FramesightError::DecoderUnavailable(format!("{}: {err}", self.ffmpeg_bin))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(FramesightError::DecoderFailed {
                status: output.status,
                stderr: tail(stderr.trim_end(), STDERR_TAIL).to_string(),
            });
        }

        let frames = collect_frames(&frames_dir).await?;
        info!(frames = frames.len(), dir = %frames_dir.display(), "Extraction complete");
        Ok(frames)
    }
}

async fn resolve_output_dir(output_dir: Option<&Path>) -> Result<PathBuf, FramesightError> {
    let dir = match output_dir {
        Some(dir) => dir.to_path_buf(),
        None => std::env::temp_dir().join(format!("framesight-frames-{}", Uuid::new_v4())),
    };
    tokio::fs::create_dir_all(&dir).await?;
    Ok(dir)
}

/// List `dir` and return the generated frames in lexicographic order.
///
/// Files not matching the `frame_*.jpg` naming pattern are ignored.
pub async fn collect_frames(dir: &Path) -> Result<Vec<Frame>, FramesightError> {
    let mut names = Vec::new();
    let mut entries = tokio::fs::read_dir(dir).await?;
    while let Some(entry) = entries.next_entry().await? {
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        if name.starts_with(FRAME_PREFIX) && name.ends_with(FRAME_EXT) {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names
        .into_iter()
        .map(|name| Frame::new(dir.join(name)))
        .collect())
}

fn tail(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut start = s.len() - max;
    while !s.is_char_boundary(start) {
        start += 1;
    }
    &s[start..]
}

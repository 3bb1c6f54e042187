//! Decorated video reference parsing.
//!
//! References arrive as `video:<path>?fps=<n>&timestamps=<0|1>`, with both
//! the prefix and the query optional. The raw string is parsed exactly once
//! at the boundary; everything downstream only sees the typed form.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Literal prefix marking a string as a video reference.
pub const VIDEO_PREFIX: &str = "video:";

/// Frame sampling options carried by a video reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingOptions {
    /// Frames to extract per second of source video. Always >= 1.
    pub fps: u32,
    /// Overlay elapsed time and the source file name onto each frame.
    pub timestamps: bool,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            fps: 1,
            timestamps: false,
        }
    }
}

/// A parsed video reference: source path plus sampling options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoReference {
    pub path: PathBuf,
    pub options: SamplingOptions,
}

impl VideoReference {
    /// Parse a decorated reference string.
    ///
    /// Never fails: malformed query strings, unrecognized keys, and
    /// unparseable values all fall back to defaults. The first occurrence
    /// of a recognized key wins. Does not touch the filesystem.
    pub fn parse(raw: &str) -> Self {
        let stripped = raw.strip_prefix(VIDEO_PREFIX).unwrap_or(raw);
        let (path_part, query_part) = match stripped.split_once('?') {
            Some((path, query)) => (path, query),
            None => (stripped, ""),
        };

        let mut options = SamplingOptions::default();
        let mut saw_fps = false;
        let mut saw_timestamps = false;

        for pair in query_part.split('&') {
            let Some((key, value)) = pair.split_once('=') else {
                continue;
            };
            match key {
                "fps" if !saw_fps => {
                    saw_fps = true;
                    if let Ok(fps) = value.parse::<u32>() {
                        if fps >= 1 {
                            options.fps = fps;
                        }
                    }
                }
                "timestamps" if !saw_timestamps => {
                    saw_timestamps = true;
                    options.timestamps = value == "1";
                }
                _ => {}
            }
        }

        Self {
            path: PathBuf::from(path_part),
            options,
        }
    }

    /// Base name of the source file, used for overlays.
    pub fn file_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("video")
    }

    /// Source file name without its extension, used for report names.
    pub fn file_stem(&self) -> &str {
        self.path
            .file_stem()
            .and_then(|name| name.to_str())
            .unwrap_or("video")
    }
}

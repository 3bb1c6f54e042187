//! Presence-only processed-video cache.
//!
//! One `<hash>.processed` marker per fingerprint. The fingerprint covers
//! the absolute path, modification time, and size of the video file — not
//! the prompt: a marker means "this video has been analyzed at all".

use std::path::{Path, PathBuf};
use std::time::UNIX_EPOCH;

use anyhow::Result;
use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::debug;

/// Default cache directory name.
pub const DEFAULT_CACHE_DIR: &str = ".video_cache";

/// Compute the cache fingerprint for a video file.
///
/// Derived from the canonical path, modification time in milliseconds, and
/// byte size, so any content change invalidates prior markers.
pub async fn fingerprint(video: &Path) -> Result<String> {
    let canonical = tokio::fs::canonicalize(video).await?;
    let metadata = tokio::fs::metadata(&canonical).await?;
    let mtime_ms = metadata
        .modified()?
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    let key = format!("{}:{}:{}", canonical.display(), mtime_ms, metadata.len());
    let digest = Sha256::digest(key.as_bytes());
    Ok(format!("{digest:x}"))
}

fn marker_path(cache_dir: &Path, hash: &str) -> PathBuf {
    cache_dir.join(format!("{hash}.processed"))
}

/// Whether a completed run is already recorded for this video.
///
/// Fails open: any lookup failure (missing video, missing cache directory,
/// missing marker) is a cache miss, never an error.
pub async fn is_processed(video: &Path, cache_dir: &Path) -> bool {
    match fingerprint(video).await {
        Ok(hash) => tokio::fs::try_exists(marker_path(cache_dir, &hash))
            .await
            .unwrap_or(false),
        Err(err) => {
            debug!(error = %err, "Cache lookup failed, treating as miss");
            false
        }
    }
}

/// Record a completed run for this video.
///
/// The marker's content is a timestamp that is never read back; its
/// presence is all that matters. Recreating an existing marker is harmless.
pub async fn mark_processed(video: &Path, cache_dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(cache_dir).await?;
    let hash = fingerprint(video).await?;
    tokio::fs::write(marker_path(cache_dir, &hash), Utc::now().to_rfc3339()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, SystemTime};

    #[tokio::test]
    async fn mark_then_lookup_hits() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        std::fs::write(&video, b"fake video bytes").unwrap();
        let cache_dir = dir.path().join("cache");

        assert!(!is_processed(&video, &cache_dir).await);
        mark_processed(&video, &cache_dir).await.unwrap();
        assert!(is_processed(&video, &cache_dir).await);
    }

    #[tokio::test]
    async fn missing_video_fails_open() {
        let dir = tempfile::tempdir().unwrap();
        let cache_dir = dir.path().join("cache");
        assert!(!is_processed(&dir.path().join("gone.mp4"), &cache_dir).await);
    }

    #[tokio::test]
    async fn size_change_invalidates_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        std::fs::write(&video, b"v1").unwrap();
        let before = fingerprint(&video).await.unwrap();

        std::fs::write(&video, b"v1 plus more").unwrap();
        let after = fingerprint(&video).await.unwrap();
        assert_ne!(before, after);
    }

    #[tokio::test]
    async fn mtime_change_invalidates_fingerprint() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        std::fs::write(&video, b"same content").unwrap();
        let before = fingerprint(&video).await.unwrap();

        let file = std::fs::File::options().write(true).open(&video).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000))
            .unwrap();
        drop(file);

        let after = fingerprint(&video).await.unwrap();
        assert_ne!(before, after);
    }

    #[tokio::test]
    async fn cached_marker_survives_for_unchanged_file() {
        let dir = tempfile::tempdir().unwrap();
        let video = dir.path().join("clip.mp4");
        std::fs::write(&video, b"stable").unwrap();
        let cache_dir = dir.path().join("cache");

        mark_processed(&video, &cache_dir).await.unwrap();
        assert!(is_processed(&video, &cache_dir).await);
        assert!(is_processed(&video, &cache_dir).await);
    }
}

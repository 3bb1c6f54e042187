//! Analysis report persistence.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{SecondsFormat, Utc};

use framesight_core::VideoReference;

/// Write the raw analysis text to a timestamped report file.
///
/// The file lands in `output_dir` when given, otherwise the current
/// directory, named `<video-stem>_analysis_<timestamp>.txt`.
pub async fn save_report(
    reference: &VideoReference,
    analysis: &str,
    output_dir: Option<&Path>,
) -> Result<PathBuf> {
    let timestamp = Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-");
    let report_dir = output_dir.unwrap_or_else(|| Path::new("."));
    let report_path =
        report_dir.join(format!("{}_analysis_{timestamp}.txt", reference.file_stem()));

    tokio::fs::create_dir_all(report_dir).await?;
    tokio::fs::write(&report_path, analysis).await?;
    Ok(report_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn writes_raw_text_under_derived_name() {
        let dir = tempfile::tempdir().unwrap();
        let reference = VideoReference::parse("video:clips/sample.mp4?fps=2");

        let path = save_report(&reference, "a quiet street", Some(dir.path()))
            .await
            .unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("sample_analysis_"));
        assert!(name.ends_with(".txt"));
        assert!(!name.contains(':'));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "a quiet street");
    }

    #[tokio::test]
    async fn creates_report_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("reports");
        let reference = VideoReference::parse("sample.mp4");

        let path = save_report(&reference, "text", Some(&nested)).await.unwrap();
        assert!(path.starts_with(&nested));
        assert!(nested.is_dir());
    }
}

//! Image MIME tagging for encoded frames.

use std::path::Path;

/// MIME type for a frame image, by file extension.
///
/// The extractor only emits `.jpg`, so unknown extensions fall back to JPEG.
pub fn image_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "bmp"          => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        _              => "image/jpeg",
    }
}

//! Filter-graph construction for the external decoder.

use framesight_core::SamplingOptions;

/// Build the `-vf` filter expression for one extraction run.
///
/// Always includes the frame-rate-selection term. When timestamps are
/// requested, appends two overlay terms: elapsed time since start in the
/// bottom-right corner, and the source file's base name in the corner
/// above it.
pub fn build_filter(options: &SamplingOptions, source_name: &str) -> String {
    let mut filter = format!("fps={}", options.fps);
    if options.timestamps {
        filter.push_str(&format!(
            ",drawtext=text='%{{pts\\:hms}}':x=W-tw-10:y=H-th-10:fontsize=24:fontcolor=white:box=1:boxcolor=black@0.5\
             ,drawtext=text='{source_name}':x=W-tw-10:y=H-th-40:fontsize=18:fontcolor=white:box=1:boxcolor=black@0.5"
        ));
    }
    filter
}

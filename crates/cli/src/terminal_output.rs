//! Terminal output: ANSI note formatting and result summaries.

use framesight_core::{CostReport, Frame};

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const CYAN: &str = "\x1b[36m";

/// Check if the terminal supports color output.
pub fn supports_color() -> bool {
    std::env::var("NO_COLOR").is_err()
        && (std::env::var("COLORTERM").is_ok()
            || std::env::var("TERM")
                .map(|t| t != "dumb")
                .unwrap_or(false))
}

/// Print a formatted INFO note to stdout.
pub fn note_info(msg: &str) {
    if supports_color() {
        println!("{CYAN}{BOLD}ℹ{RESET} {msg}");
    } else {
        println!("INFO: {msg}");
    }
}

/// Print a formatted ERROR note.
pub fn note_error(msg: &str) {
    if supports_color() {
        eprintln!("{RED}{BOLD}✗{RESET} {msg}");
    } else {
        eprintln!("ERROR: {msg}");
    }
}

/// Print a formatted SUCCESS note.
pub fn note_success(msg: &str) {
    if supports_color() {
        println!("{GREEN}{BOLD}✓{RESET} {msg}");
    } else {
        println!("OK: {msg}");
    }
}

/// Render the extraction-only summary: count, directory, file listing.
pub fn extraction_summary(frames: &[Frame]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Extraction summary:\n  Total frames: {}\n",
        frames.len()
    ));
    let dir = frames
        .first()
        .and_then(|frame| frame.path.parent())
        .map(|parent| parent.display().to_string())
        .unwrap_or_else(|| "n/a".to_string());
    out.push_str(&format!("  Output directory: {dir}\n"));
    if !frames.is_empty() {
        out.push_str("  Frame files:\n");
        for (index, frame) in frames.iter().enumerate() {
            out.push_str(&format!("    {}: {}\n", index + 1, frame.file_name()));
        }
    }
    out
}

/// Render the advisory cost section of an analysis run.
pub fn cost_summary(cost: &CostReport) -> String {
    format!(
        "Cost analysis (estimates):\n  \
         Input tokens: {} (${:.4})\n  \
         Output tokens: {} (${:.4})\n  \
         Total cost: ${:.4}\n  \
         Processing time: {:.1}s\n",
        cost.input_tokens,
        cost.input_cost,
        cost.output_tokens,
        cost.output_cost,
        cost.total_cost,
        cost.elapsed_ms as f64 / 1000.0
    )
}

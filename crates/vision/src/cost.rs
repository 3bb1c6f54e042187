//! Advisory token and cost estimation.
//!
//! Rough linear approximations surfaced for operator visibility. Never
//! billing-accurate, never used for control flow.

use framesight_core::CostReport;

/// Approximately one input token per 10 KiB of encoded image data.
const IMAGE_BYTES_PER_TOKEN: u64 = 10 * 1024;
/// Approximately four characters per text token.
const CHARS_PER_TOKEN: u64 = 4;

/// Fixed per-thousand-token rates in dollars.
pub const INPUT_COST_PER_1K: f64 = 0.075;
pub const OUTPUT_COST_PER_1K: f64 = 0.30;

/// Approximate input tokens for one image of `byte_len` raw bytes.
pub fn image_tokens(byte_len: usize) -> u64 {
    (byte_len as u64).div_ceil(IMAGE_BYTES_PER_TOKEN)
}

/// Approximate tokens for `char_len` characters of text.
pub fn text_tokens(char_len: usize) -> u64 {
    (char_len as u64).div_ceil(CHARS_PER_TOKEN)
}

/// Assemble the advisory report from token counts and elapsed time.
pub fn report(input_tokens: u64, output_tokens: u64, elapsed_ms: u64) -> CostReport {
    let input_cost = (input_tokens as f64 / 1000.0) * INPUT_COST_PER_1K;
    let output_cost = (output_tokens as f64 / 1000.0) * OUTPUT_COST_PER_1K;
    CostReport {
        input_tokens,
        output_tokens,
        input_cost,
        output_cost,
        total_cost: input_cost + output_cost,
        elapsed_ms,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_tokens_round_up() {
        assert_eq!(image_tokens(0), 0);
        assert_eq!(image_tokens(1), 1);
        assert_eq!(image_tokens(10 * 1024), 1);
        assert_eq!(image_tokens(10 * 1024 + 1), 2);
    }

    #[test]
    fn text_tokens_round_up() {
        assert_eq!(text_tokens(0), 0);
        assert_eq!(text_tokens(4), 1);
        assert_eq!(text_tokens(5), 2);
    }

    #[test]
    fn rates_apply_per_thousand() {
        let report = report(1000, 2000, 42);
        assert!((report.input_cost - 0.075).abs() < 1e-9);
        assert!((report.output_cost - 0.60).abs() < 1e-9);
        assert!((report.total_cost - 0.675).abs() < 1e-9);
        assert_eq!(report.elapsed_ms, 42);
    }
}

//! Frame extraction: filter-graph construction and decoder invocation.

pub mod extractor;
pub mod filter;

pub use extractor::{collect_frames, FrameExtractor, FRAME_EXT, FRAME_PREFIX};
pub use filter::build_filter;

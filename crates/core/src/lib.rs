pub mod error;
pub mod reference;
pub mod traits;
pub mod types;

pub use error::FramesightError;
pub use reference::{SamplingOptions, VideoReference, VIDEO_PREFIX};
pub use traits::{EncodedImage, VisionProvider, VisionRequest, VisionResponse};
pub use types::{Analysis, CostReport, Frame};

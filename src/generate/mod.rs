//! Image generation stub and its session bookkeeping.

mod session;
mod stub;
mod types;

pub use session::{GenerationSession, GenerationTicket};
pub use stub::MockImageGenerator;
pub use types::{
    dimensions_for, is_known_aspect_ratio, Dimensions, GenerateRequest, GenerateResponse,
    GeneratedImage, Quality, DEFAULT_ASPECT_RATIO,
};

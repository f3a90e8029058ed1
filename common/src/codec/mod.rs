//! Pure conversions used by the markup producers: pasted URL to video id, and
//! aspect ratio to the wrapper's padding percentage.

mod aspect_ratio;
mod video_id;

pub use aspect_ratio::{aspect_ratio_percentage, aspect_ratio_style};
pub use video_id::video_id;

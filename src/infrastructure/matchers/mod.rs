//! Corner matcher implementations

mod image_corner_matcher;

pub use image_corner_matcher::ImageCornerMatcher;

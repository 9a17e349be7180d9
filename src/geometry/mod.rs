pub mod point;
pub mod rect;

pub use point::Point2;
pub use rect::{bounding, Rect};

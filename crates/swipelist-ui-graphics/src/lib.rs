//! Pure geometry for swipelist
//!
//! Points, sizes and rectangles in logical pixels. Rows, hit rectangles and
//! pointer positions are all expressed with these types.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Rect, Size};
}

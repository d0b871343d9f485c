//! Convenience interfaces for common decoding patterns.
//!
//! The functions in this module decode a complete polyline from a slice or a
//! reader, publishing each point to a [`FromPoints`] receiver.
//!
//! Receivers are implemented for `Vec<Point>`, and for `Option<Vec<Point>>`
//! which is initialized on first use. Decoding only ever appends, so a single
//! receiver may collect several polylines in turn.

use alloc::vec::Vec;

use crate::Point;

#[cfg(feature = "std")]
pub mod reader;
pub mod slice;

#[cfg(feature = "std")]
pub use reader::{decode as decode_reader, decode_from_origin as decode_reader_from_origin};
pub use slice::{decode as decode_slice, decode_from_origin as decode_slice_from_origin};

/// Receive the points of a polyline, in order.
///
/// The first point received for each polyline is its starting point.
/// Implement this trait to decode into storage other than a `Vec`, such as a
/// fixed-capacity array.
pub trait FromPoints {
    /// Add the next point of the polyline.
    fn add_point(&mut self, point: Point);
}

impl FromPoints for Vec<Point> {
    fn add_point(&mut self, point: Point) {
        self.push(point);
    }
}

impl FromPoints for Option<Vec<Point>> {
    fn add_point(&mut self, point: Point) {
        self.get_or_insert_with(Vec::new).push(point);
    }
}

//! States processing coordinate pairs.

use zerocopy::{FromBytes, Immutable, IntoBytes, KnownLayout};

/// A single point of a polyline, in the units given by the decoding precision
/// (usually degrees).
///
/// Points are laid out as two consecutive `f64`s, so a decoded slice can be
/// viewed as raw bytes with [`IntoBytes::as_bytes`].
#[repr(C)]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, FromBytes, IntoBytes, Immutable, KnownLayout,
)]
pub struct Point {
    pub lat: f64,
    pub lng: f64,
}

impl Point {
    /// The point `(0, 0)`, from which most polylines are encoded.
    pub const ORIGIN: Self = Self { lat: 0.0, lng: 0.0 };

    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// State token to fold a latitude delta into the running point.
#[derive(Debug)]
pub struct Latitude {
    current: Point,
}

impl Latitude {
    /// Begin decoding a polyline relative to a starting point.
    pub fn new(start: Point) -> Self {
        Self { current: start }
    }

    /// The most recently completed point (initially the starting point).
    pub fn current(&self) -> Point {
        self.current
    }

    /// Transition to another state by applying a decoded latitude delta.
    ///
    /// Returns the successor state token.
    pub fn advance(self, delta: f64) -> Longitude {
        let mut current = self.current;
        current.lat += delta;

        Longitude { current }
    }
}

/// State token to fold a longitude delta into the running point.
#[derive(Debug)]
pub struct Longitude {
    current: Point,
}

impl Longitude {
    /// Transition to another state by applying a decoded longitude delta.
    ///
    /// Returns the completed point, and a successor state token.
    pub fn advance(self, delta: f64) -> (Point, Latitude) {
        let mut current = self.current;
        current.lng += delta;

        (current, Latitude { current })
    }
}

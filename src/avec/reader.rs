//! Reader-based decoder implementation.
//!
//! The reader is drained into a buffer before decoding begins, so a polyline
//! read this way must fit in memory.
//!
//! _Requires Cargo feature `std`._

use std::{io::Read, vec::Vec};

use thiserror::Error;

use crate::Point;

use super::{FromPoints, slice};

extern crate std;

/// Errors occurring while decoding from a reader.
#[derive(Debug, Error)]
pub enum Error {
    /// An error from the supplied reader.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Reached the end of the reader before the final byte of a token.
    #[error(transparent)]
    Token(#[from] slice::Error),
}

/// Decode a polyline from a reader relative to a starting point, publishing
/// each point to a receiver.
///
/// No points are published if reading fails. Otherwise, this behaves as
/// [`slice::decode`] over every byte of the reader.
///
/// This method is also re-exported as `unspool::avec::decode_reader`.
///
/// _Requires Cargo feature `std`._
pub fn decode(
    start: Point,
    r: &mut impl Read,
    o: &mut impl FromPoints,
    precision: f64,
) -> Result<(), Error> {
    let mut buf = Vec::new();
    let size = r.read_to_end(&mut buf)?;

    tracing::trace!(size, "read polyline");

    Ok(slice::decode(start, &buf, o, precision)?)
}

/// Decode a polyline from a reader relative to `(0, 0)`.
///
/// This method is also re-exported as `unspool::avec::decode_reader_from_origin`.
///
/// _Requires Cargo feature `std`._
pub fn decode_from_origin(
    r: &mut impl Read,
    o: &mut impl FromPoints,
    precision: f64,
) -> Result<(), Error> {
    decode(Point::ORIGIN, r, o, precision)
}

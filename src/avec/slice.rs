//! Slice-based decoder implementation.

use core::fmt;

use alloc::vec::Vec;
use either::Either::{Left, Right};
use thiserror::Error;

use crate::{
    Point,
    sans::{Decoder, token::Token},
};

use super::FromPoints;

/// Errors occurring while decoding from a slice.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Reached the end of the slice before the final byte of a token.
    #[error("Incomplete token ({} bytes): {} (hex 0x{})", .token.len(), Text(.token), Hex(.token))]
    IncompleteToken { token: Vec<u8> },
}

impl Error {
    /// The bytes of the token left incomplete.
    pub fn token(&self) -> &[u8] {
        match self {
            Self::IncompleteToken { token } => token,
        }
    }
}

/// Decode a single token from the start of a slice.
///
/// Returns the number of bytes making up the token, and its value divided by
/// `precision`. If the slice ends before the token does, the error holds every
/// byte scanned.
pub fn decode_token(r: &[u8], precision: f64) -> Result<(usize, f64), Error> {
    let mut state = Token::new();

    for (i, &b) in r.iter().enumerate() {
        state = match state.advance(b) {
            Left(state) => state,
            Right(v) => return Ok((i + 1, v as f64 / precision)),
        };
    }

    Err(Error::IncompleteToken { token: r.to_vec() })
}

/// Decode a polyline from a slice relative to a starting point, publishing
/// each point to a receiver.
///
/// The starting point is published first, followed by one point per
/// coordinate pair in the slice. If the slice is truncated, points completed
/// before the incomplete token remain published.
///
/// This method is also re-exported as `unspool::avec::decode_slice`.
pub fn decode(
    start: Point,
    r: &[u8],
    o: &mut impl FromPoints,
    precision: f64,
) -> Result<(), Error> {
    let i = &mut 0; // Offset of the next token.

    o.add_point(start);

    let mut latitude = Decoder::new(start);
    let mut count = 0;

    while *i < r.len() {
        let longitude = latitude.advance(take(r, i, precision)?);
        let (point, successor) = longitude.advance(take(r, i, precision)?);

        o.add_point(point);
        latitude = successor;
        count += 1;
    }

    tracing::trace!(points = count, "decoded polyline");

    Ok(())
}

/// Decode a polyline from a slice relative to `(0, 0)`.
///
/// This method is also re-exported as `unspool::avec::decode_slice_from_origin`.
pub fn decode_from_origin(r: &[u8], o: &mut impl FromPoints, precision: f64) -> Result<(), Error> {
    decode(Point::ORIGIN, r, o, precision)
}

/// Take a single token from an offset in a slice, advancing the offset.
fn take(r: &[u8], i: &mut usize, precision: f64) -> Result<f64, Error> {
    let (n, v) = decode_token(r.get(*i..).unwrap_or_default(), precision).inspect_err(|e| {
        tracing::debug!(offset = *i, len = e.token().len(), "incomplete token");
    })?;
    *i += n;

    Ok(v)
}

/// Renders bytes as text, replacing invalid UTF-8.
struct Text<'a>(&'a [u8]);

impl fmt::Display for Text<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for chunk in self.0.utf8_chunks() {
            f.write_str(chunk.valid())?;
            if !chunk.invalid().is_empty() {
                f.write_str("\u{FFFD}")?;
            }
        }
        Ok(())
    }
}

/// Renders bytes as lowercase hexadecimal digits.
struct Hex<'a>(&'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.iter().try_for_each(|b| write!(f, "{b:02x}"))
    }
}

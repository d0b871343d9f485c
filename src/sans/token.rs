//! States processing single tokens.

use either::Either::{self, Left, Right};
use tartan_bitfield::bitfield;

/// Value added to every encoded byte to keep it printable.
pub const OFFSET: u8 = 63;

/// State token to decode the bytes of a variable-length signed integer.
#[derive(Debug, Default)]
pub struct Token {
    accumulator: i64,
    shift: u32,
}

impl Token {
    /// Begin decoding a token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Transition to another state by decoding a single byte of a token.
    ///
    /// Returns the decoded integer if the byte ended the token, or a successor
    /// state expecting more bytes.
    pub fn advance(self, r: u8) -> Either<Self, i64> {
        bitfield! {
            struct Chunk(u8) {
                [0..5] bits: u8,
                [5] has_more,
            }
        }

        let chunk = Chunk(r.wrapping_sub(OFFSET));

        // Groups beyond the width of the accumulator are discarded.
        let bits = i64::from(chunk.bits())
            .checked_shl(self.shift)
            .unwrap_or(0);
        let accumulator = self.accumulator | bits;

        if chunk.has_more() {
            Left(Self {
                accumulator,
                shift: self.shift.saturating_add(5),
            })
        } else {
            Right(unzigzag(accumulator))
        }
    }
}

/// Recover a signed integer from its zig-zag representation.
fn unzigzag(v: i64) -> i64 {
    if v & 1 != 0 { !(v >> 1) } else { v >> 1 }
}

//! Internal finite-state machine for implementing decoders.
//!
//! This module is intended for applications that need fine control over
//! decoder internals. See [`crate::avec`] for implementations covering common
//! decoding patterns.
//!
//! # Architecture
//!
//! Each state is represented by a non-copy token. Once enough input is ready,
//! transition to another state by calling the token's `advance` method. This
//! will return a successor state token, along with any extracted data.
//!
//! Decoding happens at two levels:
//!
//! - A [`token::Token`] consumes one byte at a time, until it yields a signed
//! integer.
//!
//! - A [`point::Latitude`] and [`point::Longitude`] alternate, each folding one
//! decoded integer into the running point. Advancing a `Longitude` completes a
//! point.
//!
//! Some areas of the decoding process are not represented in the finite-state
//! machine and must be carefully written:
//!
//! - Ending decoding once every byte of the polyline has been consumed.
//!
//! - Reporting a token left incomplete by the end of the input. The states
//! never see the end of the input, so only the caller can detect this.
//!
//! Implementers are recommended to begin by studying and modifying a decoder
//! from the [`crate::avec`] module.

pub mod point;
pub mod token;

/// Entrypoint to the finite-state machine.
pub type Decoder = point::Latitude;

#![no_std]

//! A small decoder for encoded polylines, the compact ASCII representation of
//! a path used by web mapping services.
//!
//! Unspool provides ergonomic interfaces that decode a complete buffer into a
//! sequence of points, and exposes its underlying finite-state machine for
//! applications needing finer control over internals (such as those managing
//! their own buffers).
//!
//! Most users should begin with the functions in the [`avec`] module. If these
//! prove insufficient, consider driving the states described in the [`sans`]
//! module directly.
//!
//! ## Cargo Features
//!
//! The following crate feature flags are available:
//!
//! - `std`: enable reader-based decoder (default).

extern crate alloc;

pub mod avec;
pub mod sans;

pub use sans::point::Point;

/// Precision of polylines storing five decimal places (the common default).
pub const PRECISION_5: f64 = 1e5;

/// Precision of polylines storing six decimal places.
pub const PRECISION_6: f64 = 1e6;

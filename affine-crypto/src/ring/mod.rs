//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing finite rings Z_m and performing modular arithmetic.

pub mod helper;
pub mod math;

pub use helper::{extended_gcd, gcd};
pub use math::Ring;

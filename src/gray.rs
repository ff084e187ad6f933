//! Reflected binary Gray code
//!
//! Axis orderings for the grid. Neighbouring positions (including the
//! wrap from last to first) differ in exactly one bit, so neighbouring
//! cells differ in exactly one variable.

use crate::error::{Error, Result};

/// Widest axis accepted by [`gray_sequence`]; a `u32` holds 2^31 values
/// per axis at most
pub const MAX_GRAY_BITS: u32 = u32::BITS - 1;

/// Gray code of `i`
pub fn gray_encode(i: u32) -> u32 {
    i ^ (i >> 1)
}

/// Inverse of [`gray_encode`]
pub fn gray_decode(mut g: u32) -> u32 {
    let mut shift = 1;
    while shift < u32::BITS {
        g ^= g >> shift;
        shift <<= 1;
    }
    g
}

/// Gray sequence of width `bits`: element `i` is `i ^ (i >> 1)`.
///
/// Width 0 yields `[0]`.
pub fn gray_sequence(bits: u32) -> Result<Vec<u32>> {
    if bits > MAX_GRAY_BITS {
        return Err(Error::Range(format!(
            "Gray width {} exceeds maximum of {}",
            bits, MAX_GRAY_BITS
        )));
    }
    Ok((0..1u32 << bits).map(gray_encode).collect())
}

/// Position of `value` along an axis ordered by Gray code
pub fn gray_position(value: u32) -> usize {
    gray_decode(value) as usize
}

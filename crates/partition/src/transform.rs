// Path: crates/partition/src/transform.rs

//! The byte escape used by the stream format.
//!
//! Payload bytes live in `0..=254`. Flipping the least-significant bit keeps
//! every payload byte inside that range except for the pairs that would
//! cross a reserved value, so those boundary values are left untouched:
//!
//! * `0` and `1` stay fixed, since `1 ^ 1 == 0` would otherwise collide.
//! * `254` stays fixed, since `254 ^ 1 == 255` is the sentinel.
//!
//! Everything else swaps with its neighbour (`2 <-> 3`, ..., `252 <-> 253`).
//! Applying the function twice is the identity, so one function serves both
//! directions.

use bytepart_types::SENTINEL;

/// Toggles bit 0 of a payload byte, leaving `0`, `1` and `254` unchanged.
///
/// `b` must not be the sentinel.
#[inline]
pub const fn toggle_low_bit(b: u8) -> u8 {
    debug_assert!(b != SENTINEL, "the sentinel is never a payload byte");
    match b {
        0 | 1 | 254 => b,
        _ => b ^ 1,
    }
}

/// Maps a raw payload byte to its stream representation.
#[inline]
pub const fn encode_byte(b: u8) -> u8 {
    toggle_low_bit(b)
}

/// Maps a stream byte back to its raw payload value.
#[inline]
pub const fn decode_byte(b: u8) -> u8 {
    toggle_low_bit(b)
}

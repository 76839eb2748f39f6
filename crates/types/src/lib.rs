// Path: crates/types/src/lib.rs
#![forbid(unsafe_code)]
#![deny(missing_docs)]

//! # bytepart Types
//!
//! Shared error enums and configuration objects for the bytepart workspace.
//!
//! ## Architectural Role
//!
//! As the base crate, `bytepart-types` has minimal dependencies and is a
//! dependency of both `bytepart-crypto` and `bytepart`. Keeping the error and
//! configuration definitions here lets the hash layer and the container agree
//! on a single `CryptoError` without depending on each other.

/// The reserved byte value that terminates every partition in an encoded stream.
pub const SENTINEL: u8 = 0xFF;

/// A top-level, crate-wide `Result` type alias with a default error type.
pub type Result<T, E = crate::error::PartitionError> = std::result::Result<T, E>;

/// Configuration structures for decoding and hashing (`PartitionConfig`).
pub mod config;
/// A unified set of all error types used across the workspace.
pub mod error;

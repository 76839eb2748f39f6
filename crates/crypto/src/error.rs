// Path: crates/crypto/src/error.rs
//! Local error types for the `bytepart-crypto` crate.

// Re-export the canonical error type from the types crate.
pub use bytepart_types::error::CryptoError;

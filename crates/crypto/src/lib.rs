// Path: crates/crypto/src/lib.rs
//! # bytepart Crypto Crate Lints
//!
//! This crate enforces a strict set of lints to ensure high-quality,
//! panic-free, and well-documented code. Panics are disallowed in non-test
//! code to promote robust error handling.
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::indexing_slicing
    )
)]
//! # bytepart Cryptography
//!
//! Digest algorithms behind a small object-safe trait, so callers can hash a
//! partition with any algorithm they choose.

pub mod algorithms;
pub mod error;

pub use algorithms::hash::{
    hasher_for, sha256, sha512, FnHash, HashFunction, Sha256Hash, Sha512Hash,
};

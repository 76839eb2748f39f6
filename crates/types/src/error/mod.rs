// Path: crates/types/src/error/mod.rs
//! Core error types for the bytepart container.

use thiserror::Error;

/// A trait for assigning a stable, machine-readable string code to an error.
pub trait ErrorCode {
    /// Returns the unique, stable string identifier for this error variant.
    fn code(&self) -> &'static str;
}

/// Errors raised by the partition store and the stream codec.
#[derive(Error, Debug)]
pub enum PartitionError {
    /// The requested partition position does not exist.
    #[error("Partition {position} out of range (count {count})")]
    IndexOutOfRange {
        /// The position that was requested.
        position: usize,
        /// The number of partitions currently held.
        count: usize,
    },
    /// A byte offset or range falls outside the partition's bounds.
    #[error(
        "Byte range {offset}..+{length} out of range for partition {position} of size {size}"
    )]
    ByteRangeOutOfRange {
        /// The partition that was addressed.
        position: usize,
        /// The first byte of the requested range.
        offset: usize,
        /// The number of bytes requested.
        length: usize,
        /// The current size of the partition.
        size: usize,
    },
    /// The accumulation sink used while decoding failed.
    #[error("Sink error: {0}")]
    Sink(String),
    /// Computing a partition digest failed.
    #[error("Hash error: {0}")]
    Hash(#[from] CryptoError),
}

impl PartitionError {
    /// True for both the position and the byte-range flavours of out-of-range access.
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Self::IndexOutOfRange { .. } | Self::ByteRangeOutOfRange { .. }
        )
    }
}

impl From<std::io::Error> for PartitionError {
    fn from(e: std::io::Error) -> Self {
        Self::Sink(e.to_string())
    }
}

impl ErrorCode for PartitionError {
    fn code(&self) -> &'static str {
        match self {
            Self::IndexOutOfRange { .. } => "PARTITION_INDEX_OUT_OF_RANGE",
            Self::ByteRangeOutOfRange { .. } => "PARTITION_BYTE_RANGE_OUT_OF_RANGE",
            Self::Sink(_) => "PARTITION_SINK_ERROR",
            Self::Hash(_) => "PARTITION_HASH_FAILED",
        }
    }
}

/// Errors from cryptographic operations.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// A hash digest had an unexpected length.
    #[error("Invalid hash length: expected {expected}, got {got}")]
    InvalidHashLength {
        /// The expected length in bytes.
        expected: usize,
        /// The actual length in bytes.
        got: usize,
    },
}

impl ErrorCode for CryptoError {
    fn code(&self) -> &'static str {
        match self {
            Self::InvalidHashLength { .. } => "CRYPTO_INVALID_HASH_LENGTH",
        }
    }
}

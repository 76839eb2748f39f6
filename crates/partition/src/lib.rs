// Path: crates/partition/src/lib.rs
#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::unimplemented,
        clippy::todo,
        clippy::indexing_slicing
    )
)]

//! # bytepart
//!
//! A container that packs any number of variable-length byte buffers
//! ("partitions") into one flat, self-delimiting stream.
//!
//! ## Wire Format
//!
//! *   **Sentinel Terminated:** Each partition is followed by a single `0xFF`
//!     byte. There is no length prefix, magic header or version tag.
//!
//! *   **Escaped Payload:** Every payload byte passes through
//!     [`transform::toggle_low_bit`], which never yields `0xFF`, so the
//!     sentinel cannot appear inside a partition.
//!
//! ## Layout
//!
//! *   [`store::PartitionStore`] holds decoded partitions and supports random
//!     access mutation, resizing and removal by position.
//!
//! *   [`codec`] converts between a list of partitions and the flat stream,
//!     accumulating through a pluggable [`sink::ByteSink`].
//!
//! *   [`hasher`] digests a single partition's raw bytes.

pub mod codec;
pub mod hasher;
pub mod sink;
pub mod store;
pub mod transform;

// Re-export primary types for consumer ergonomics
pub use bytepart_types::config::{DigestAlgorithm, PartitionConfig, SinkKind};
pub use bytepart_types::error::{ErrorCode, PartitionError};
pub use bytepart_types::{Result, SENTINEL};
pub use codec::{decode, decode_with, encode, encoded_len};
pub use hasher::{partition_digest, partition_hash, partition_sha256};
pub use sink::{open_sink, ByteSink, DiskSink, MemorySink};
pub use store::PartitionStore;

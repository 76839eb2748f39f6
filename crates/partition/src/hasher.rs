// Path: crates/partition/src/hasher.rs

//! Digests over a single partition's raw bytes.
//!
//! Hashing always reads the decoded payload held by the store, never the
//! escaped stream form, so a digest is independent of how the store was built.

use crate::store::PartitionStore;
use bytepart_crypto::{hasher_for, sha256, HashFunction};
use bytepart_types::config::{DigestAlgorithm, PartitionConfig};
use bytepart_types::Result;

/// Hashes the partition at `position` with `hasher`.
pub fn partition_hash(
    store: &PartitionStore,
    position: usize,
    hasher: &dyn HashFunction,
) -> Result<Vec<u8>> {
    let bytes = store.get(position)?;
    Ok(hasher.hash(bytes)?)
}

/// Hashes the partition at `position` with SHA-256.
pub fn partition_sha256(store: &PartitionStore, position: usize) -> Result<[u8; 32]> {
    Ok(sha256(store.get(position)?)?)
}

/// Hashes the partition at `position` with a configured algorithm.
pub fn partition_digest(
    store: &PartitionStore,
    position: usize,
    algorithm: DigestAlgorithm,
) -> Result<Vec<u8>> {
    partition_hash(store, position, hasher_for(algorithm).as_ref())
}

impl PartitionStore {
    /// Hashes the partition at `position` with `hasher`.
    pub fn hash(&self, position: usize, hasher: &dyn HashFunction) -> Result<Vec<u8>> {
        partition_hash(self, position, hasher)
    }

    /// Hashes the partition at `position` with SHA-256.
    pub fn hash_default(&self, position: usize) -> Result<[u8; 32]> {
        partition_sha256(self, position)
    }

    /// Hashes the partition at `position` with the digest named by `config`.
    pub fn hash_configured(&self, position: usize, config: &PartitionConfig) -> Result<Vec<u8>> {
        partition_digest(self, position, config.digest)
    }
}

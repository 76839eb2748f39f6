// Path: crates/types/src/config/mod.rs

//! Shared configuration structures for decoding and hashing partitions.
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Selects the buffer used to accumulate a partition while decoding a stream.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub enum SinkKind {
    /// Accumulate in a growable in-memory buffer.
    #[default]
    Memory,
    /// Spill accumulated bytes to an anonymous temporary file.
    Disk,
}

/// Selects the digest used when no algorithm is passed explicitly.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "PascalCase")]
pub enum DigestAlgorithm {
    /// SHA-256 (32-byte digest).
    #[default]
    Sha256,
    /// SHA-512 (64-byte digest).
    Sha512,
}

/// Configuration for building a `PartitionStore` from an encoded stream.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct PartitionConfig {
    /// The accumulation buffer used by the decoder.
    #[serde(default)]
    pub sink: SinkKind,
    /// Directory that receives temporary files when `sink` is `Disk`.
    /// Falls back to the system temp directory when unset.
    #[serde(default)]
    pub spill_dir: Option<PathBuf>,
    /// The digest used by `PartitionStore::hash_configured`.
    #[serde(default)]
    pub digest: DigestAlgorithm,
}

impl PartitionConfig {
    /// Parses a configuration from a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("failed to parse partition config")
    }

    /// Reads and parses a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
    }
}

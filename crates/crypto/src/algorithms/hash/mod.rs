// Path: crates/crypto/src/algorithms/hash/mod.rs
//! Cryptographic hash functions using sha2

use crate::error::CryptoError;
use bytepart_types::config::DigestAlgorithm;
use sha2::{Digest, Sha256, Sha512};

/// Hash function trait
pub trait HashFunction {
    /// Hash a message and return the digest
    fn hash(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError>;

    /// Get the digest size in bytes
    fn digest_size(&self) -> usize;

    /// Get the name of the hash function
    fn name(&self) -> &str;
}

/// SHA-256 hash function implementation using sha2
#[derive(Default, Clone)]
pub struct Sha256Hash;

impl HashFunction for Sha256Hash {
    fn hash(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(Sha256::digest(message).to_vec())
    }

    fn digest_size(&self) -> usize {
        32 // 256 bits = 32 bytes
    }

    fn name(&self) -> &str {
        "SHA-256"
    }
}

/// SHA-512 hash function implementation using sha2
#[derive(Default, Clone)]
pub struct Sha512Hash;

impl HashFunction for Sha512Hash {
    fn hash(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        Ok(Sha512::digest(message).to_vec())
    }

    fn digest_size(&self) -> usize {
        64 // 512 bits = 64 bytes
    }

    fn name(&self) -> &str {
        "SHA-512"
    }
}

/// Adapts a plain function into a `HashFunction`.
///
/// The output length is checked against `digest_size` on every call, so a
/// misbehaving function surfaces as `InvalidHashLength` instead of a short digest.
pub struct FnHash<F> {
    f: F,
    digest_size: usize,
    name: &'static str,
}

impl<F> FnHash<F>
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    /// Wraps `f`, which must always return `digest_size` bytes.
    pub fn new(name: &'static str, digest_size: usize, f: F) -> Self {
        Self {
            f,
            digest_size,
            name,
        }
    }
}

impl<F> HashFunction for FnHash<F>
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn hash(&self, message: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let digest = (self.f)(message);
        if digest.len() != self.digest_size {
            return Err(CryptoError::InvalidHashLength {
                expected: self.digest_size,
                got: digest.len(),
            });
        }
        Ok(digest)
    }

    fn digest_size(&self) -> usize {
        self.digest_size
    }

    fn name(&self) -> &str {
        self.name
    }
}

/// Returns the implementation selected by a configured `DigestAlgorithm`.
pub fn hasher_for(algorithm: DigestAlgorithm) -> Box<dyn HashFunction> {
    match algorithm {
        DigestAlgorithm::Sha256 => Box::new(Sha256Hash),
        DigestAlgorithm::Sha512 => Box::new(Sha512Hash),
    }
}

// Additional convenience functions
/// Create a SHA-256 hash of any type that can be referenced as bytes
pub fn sha256<T: AsRef<[u8]>>(data: T) -> Result<[u8; 32], CryptoError> {
    let hasher = Sha256Hash;
    hasher
        .hash(data.as_ref())?
        .try_into()
        .map_err(|bytes: Vec<u8>| CryptoError::InvalidHashLength {
            expected: 32,
            got: bytes.len(),
        })
}

/// Create a SHA-512 hash of any type that can be referenced as bytes
pub fn sha512<T: AsRef<[u8]>>(data: T) -> Result<[u8; 64], CryptoError> {
    let hasher = Sha512Hash;
    hasher
        .hash(data.as_ref())?
        .try_into()
        .map_err(|bytes: Vec<u8>| CryptoError::InvalidHashLength {
            expected: 64,
            got: bytes.len(),
        })
}

#[cfg(test)]
mod tests;

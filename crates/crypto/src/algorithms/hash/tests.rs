//! Tests for hash function implementations

use super::{hasher_for, sha256, sha512, FnHash, HashFunction, Sha256Hash, Sha512Hash};
use crate::error::CryptoError;
use bytepart_types::config::DigestAlgorithm;

#[test]
fn test_hash_functions() {
    let message = b"test message";

    let sha256 = Sha256Hash;
    let sha512 = Sha512Hash;

    let sha256_hash = sha256.hash(message).unwrap();
    let sha512_hash = sha512.hash(message).unwrap();

    assert_eq!(sha256_hash.len(), sha256.digest_size());
    assert_eq!(sha512_hash.len(), sha512.digest_size());

    assert_eq!(sha256.digest_size(), 32);
    assert_eq!(sha512.digest_size(), 64);

    // Verify deterministic behavior
    assert_eq!(sha256.hash(message).unwrap(), sha256.hash(message).unwrap());
    assert_eq!(sha512.hash(message).unwrap(), sha512.hash(message).unwrap());
}

#[test]
fn test_known_vectors() {
    assert_eq!(
        hex::encode(sha256(b"").unwrap()),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
    assert_eq!(
        hex::encode(sha256(b"abc").unwrap()),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
    assert_eq!(
        hex::encode(sha512(b"abc").unwrap()),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn test_hasher_for_config() {
    let h = hasher_for(DigestAlgorithm::Sha256);
    assert_eq!(h.name(), "SHA-256");
    assert_eq!(h.hash(b"abc").unwrap(), sha256(b"abc").unwrap().to_vec());

    let h = hasher_for(DigestAlgorithm::Sha512);
    assert_eq!(h.name(), "SHA-512");
    assert_eq!(h.digest_size(), 64);
}

#[test]
fn test_fn_hash_checks_length() {
    let xor = FnHash::new("xor-fold", 1, |m: &[u8]| vec![m.iter().fold(0u8, |a, b| a ^ b)]);
    assert_eq!(xor.hash(&[0x0F, 0xF0]).unwrap(), vec![0xFF]);
    assert_eq!(xor.name(), "xor-fold");

    let broken = FnHash::new("broken", 4, |_: &[u8]| vec![0u8; 3]);
    match broken.hash(b"x") {
        Err(CryptoError::InvalidHashLength { expected, got }) => {
            assert_eq!(expected, 4);
            assert_eq!(got, 3);
        }
        other => panic!("expected InvalidHashLength, got {:?}", other),
    }
}

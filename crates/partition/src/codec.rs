// Path: crates/partition/src/codec.rs

//! Conversion between a list of partitions and the flat encoded stream.
//!
//! An encoded stream is a run of records, each made of the escaped payload
//! bytes of one partition followed by a single [`SENTINEL`]. Decoding splits
//! on the sentinel and reverses the escape.
//!
//! The final byte of a stream always closes the last partition and is never
//! itself treated as payload. For any stream produced by [`encode`] that byte
//! is the last terminator, so `decode(encode(p)) == p`. A stream that does not
//! end in a terminator loses its final byte.

use crate::sink::{ByteSink, MemorySink};
use crate::transform::{decode_byte, encode_byte};
use bytepart_types::{Result, SENTINEL};

/// Exact length of the stream `encode` produces for `partitions`.
pub fn encoded_len<P: AsRef<[u8]>>(partitions: &[P]) -> usize {
    partitions.iter().map(|p| p.as_ref().len() + 1).sum()
}

/// Encodes `partitions` into a single self-delimiting stream.
pub fn encode<P: AsRef<[u8]>>(partitions: &[P]) -> Vec<u8> {
    let mut out = Vec::with_capacity(encoded_len(partitions));
    for partition in partitions {
        out.extend(partition.as_ref().iter().map(|&b| encode_byte(b)));
        out.push(SENTINEL);
    }
    out
}

/// Decodes a stream into its partitions using an in-memory accumulator.
///
/// An empty stream yields no partitions.
pub fn decode(stream: &[u8]) -> Result<Vec<Vec<u8>>> {
    decode_with(stream, &mut MemorySink::new())
}

/// Decodes a stream, accumulating each partition through `sink`.
///
/// Bytes the sink already holds (for example from an earlier decode that
/// failed partway) are discarded before the scan starts.
pub fn decode_with(stream: &[u8], sink: &mut dyn ByteSink) -> Result<Vec<Vec<u8>>> {
    if !sink.is_empty() {
        let stale = sink.finish()?;
        tracing::debug!(target: "partition", stale = stale.len(), "discarded stale sink bytes");
    }

    let mut partitions = Vec::new();
    let last = match stream.len().checked_sub(1) {
        Some(last) => last,
        None => return Ok(partitions),
    };

    for (pos, &byte) in stream.iter().enumerate() {
        if pos == last {
            if byte != SENTINEL {
                tracing::warn!(
                    target: "partition",
                    len = stream.len(),
                    "stream does not end with a terminator; final byte discarded"
                );
            }
            partitions.push(sink.finish()?);
            break;
        }

        if byte == SENTINEL {
            partitions.push(sink.finish()?);
        } else {
            sink.push(decode_byte(byte))?;
        }
    }

    tracing::debug!(
        target: "partition",
        bytes = stream.len(),
        partitions = partitions.len(),
        "decoded stream"
    );
    Ok(partitions)
}

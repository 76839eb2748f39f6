// Path: crates/partition/src/store.rs

//! The partition store.
//!
//! This module holds decoded partitions in insertion order and provides:
//! - Creation from a size or an owned buffer.
//! - Positional reads, single-byte writes, range clears, replacement and resizing.
//! - Removal, which shifts every later position down by one.
//! - Conversion to and from the encoded stream.
//!
//! Positions are not stable identifiers: after `remove(p)` the partition that
//! was at `p + 1` is found at `p`.

use crate::codec;
use crate::sink::open_sink;
use bytepart_types::config::PartitionConfig;
use bytepart_types::error::PartitionError;
use bytepart_types::Result;

/// An ordered collection of owned byte buffers addressed by position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PartitionStore {
    partitions: Vec<Vec<u8>>,
}

impl PartitionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes an encoded stream into a new store.
    pub fn from_encoded(stream: &[u8]) -> Result<Self> {
        Ok(Self {
            partitions: codec::decode(stream)?,
        })
    }

    /// Decodes an encoded stream using the sink selected by `config`.
    pub fn from_encoded_with(stream: &[u8], config: &PartitionConfig) -> Result<Self> {
        let mut sink = open_sink(config)?;
        Ok(Self {
            partitions: codec::decode_with(stream, sink.as_mut())?,
        })
    }

    /// Encodes every partition into a single stream.
    pub fn encode(&self) -> Vec<u8> {
        let stream = codec::encode(&self.partitions);
        tracing::debug!(
            target: "partition",
            partitions = self.partitions.len(),
            bytes = stream.len(),
            "encoded store"
        );
        stream
    }

    /// Appends a zero-filled partition of `size` bytes and returns its position.
    pub fn create_zeroed(&mut self, size: usize) -> usize {
        self.create(vec![0u8; size])
    }

    /// Appends `buffer` as a new partition and returns its position.
    pub fn create(&mut self, buffer: Vec<u8>) -> usize {
        self.partitions.push(buffer);
        self.partitions.len() - 1
    }

    /// The bytes of the partition at `position`.
    pub fn get(&self, position: usize) -> Result<&[u8]> {
        self.partitions
            .get(position)
            .map(Vec::as_slice)
            .ok_or(self.out_of_range(position))
    }

    /// A mutable view of the partition at `position`.
    ///
    /// The view cannot change the partition's length; use `resize` or `replace` for that.
    pub fn get_mut(&mut self, position: usize) -> Result<&mut [u8]> {
        Ok(self.entry_mut(position)?.as_mut_slice())
    }

    /// The length in bytes of the partition at `position`.
    pub fn size(&self, position: usize) -> Result<usize> {
        Ok(self.get(position)?.len())
    }

    /// Sets a single byte.
    pub fn modify_byte(&mut self, position: usize, offset: usize, value: u8) -> Result<()> {
        let partition = self.entry_mut(position)?;
        let size = partition.len();
        let byte = partition
            .get_mut(offset)
            .ok_or(PartitionError::ByteRangeOutOfRange {
                position,
                offset,
                length: 1,
                size,
            })?;
        *byte = value;
        Ok(())
    }

    /// Replaces the whole partition, returning the previous buffer.
    pub fn replace(&mut self, position: usize, buffer: Vec<u8>) -> Result<Vec<u8>> {
        Ok(std::mem::replace(self.entry_mut(position)?, buffer))
    }

    /// Zero-fills `length` bytes starting at `offset`.
    pub fn erase_range(&mut self, position: usize, offset: usize, length: usize) -> Result<()> {
        let partition = self.entry_mut(position)?;
        let size = partition.len();
        let range = match offset.checked_add(length) {
            Some(end) => partition.get_mut(offset..end),
            None => None,
        };
        let range = range.ok_or(PartitionError::ByteRangeOutOfRange {
            position,
            offset,
            length,
            size,
        })?;
        range.fill(0);
        Ok(())
    }

    /// Removes the partition at `position`; later partitions shift down by one.
    pub fn remove(&mut self, position: usize) -> Result<Vec<u8>> {
        if position >= self.partitions.len() {
            return Err(self.out_of_range(position));
        }
        let removed = self.partitions.remove(position);
        tracing::trace!(
            target: "partition",
            position,
            remaining = self.partitions.len(),
            "removed partition"
        );
        Ok(removed)
    }

    /// Truncates or zero-extends the partition to exactly `new_size` bytes.
    pub fn resize(&mut self, position: usize, new_size: usize) -> Result<()> {
        let partition = self.entry_mut(position)?;
        let old_size = partition.len();
        partition.resize(new_size, 0);
        tracing::trace!(target: "partition", position, old_size, new_size, "resized partition");
        Ok(())
    }

    /// Number of partitions.
    pub fn count(&self) -> usize {
        self.partitions.len()
    }

    /// True when the store holds no partitions.
    pub fn is_empty(&self) -> bool {
        self.partitions.is_empty()
    }

    /// Sum of all partition lengths plus one terminator byte per partition.
    ///
    /// This equals the length of the stream `encode` would produce.
    pub fn total_size(&self) -> usize {
        codec::encoded_len(&self.partitions)
    }

    /// Iterates over the partitions in position order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.partitions.iter().map(Vec::as_slice)
    }

    /// Consumes the store, returning the partitions in position order.
    pub fn into_partitions(self) -> Vec<Vec<u8>> {
        self.partitions
    }

    fn entry_mut(&mut self, position: usize) -> Result<&mut Vec<u8>> {
        let count = self.partitions.len();
        self.partitions
            .get_mut(position)
            .ok_or(PartitionError::IndexOutOfRange { position, count })
    }

    fn out_of_range(&self, position: usize) -> PartitionError {
        PartitionError::IndexOutOfRange {
            position,
            count: self.partitions.len(),
        }
    }
}

impl FromIterator<Vec<u8>> for PartitionStore {
    fn from_iter<I: IntoIterator<Item = Vec<u8>>>(iter: I) -> Self {
        Self {
            partitions: iter.into_iter().collect(),
        }
    }
}

// Path: crates/partition/src/sink.rs

//! Accumulation buffers for the decoder.
//!
//! While scanning a stream the decoder collects the bytes of the current
//! partition into a sink, then takes them out as an owned buffer when it hits
//! a terminator. The sink is reset and reused for the next partition; dropping
//! it releases whatever it holds (for `DiskSink`, the temporary file).

use bytepart_types::config::{PartitionConfig, SinkKind};
use bytepart_types::Result;
use std::fs::File;
use std::io::{BufWriter, Read, Seek, SeekFrom, Write};
use std::path::Path;

/// A byte accumulator that can hand its contents over as an owned buffer.
pub trait ByteSink {
    /// Appends one byte.
    fn push(&mut self, byte: u8) -> Result<()>;

    /// Returns everything pushed since the last call and resets the sink.
    fn finish(&mut self) -> Result<Vec<u8>>;

    /// Number of bytes currently held.
    fn len(&self) -> usize;

    /// True when nothing has been pushed since the last `finish`.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accumulates in a growable in-memory buffer.
#[derive(Debug, Default)]
pub struct MemorySink {
    buf: Vec<u8>,
}

impl MemorySink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ByteSink for MemorySink {
    fn push(&mut self, byte: u8) -> Result<()> {
        self.buf.push(byte);
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        Ok(std::mem::take(&mut self.buf))
    }

    fn len(&self) -> usize {
        self.buf.len()
    }
}

/// Accumulates in an anonymous temporary file.
///
/// The file is unlinked on creation and removed by the OS once the sink is dropped.
#[derive(Debug)]
pub struct DiskSink {
    file: BufWriter<File>,
    len: usize,
}

impl DiskSink {
    /// Creates a sink backed by a file in the system temp directory.
    pub fn new() -> Result<Self> {
        Ok(Self::from_file(tempfile::tempfile()?))
    }

    /// Creates a sink backed by a file in `dir`.
    pub fn new_in(dir: &Path) -> Result<Self> {
        Ok(Self::from_file(tempfile::tempfile_in(dir)?))
    }

    fn read_back(&mut self) -> Result<Vec<u8>> {
        self.file.flush()?;
        let file = self.file.get_mut();

        file.seek(SeekFrom::Start(0))?;
        let mut out = Vec::with_capacity(self.len);
        Read::by_ref(file).take(self.len as u64).read_to_end(&mut out)?;
        Ok(out)
    }

    fn from_file(file: File) -> Self {
        Self {
            file: BufWriter::new(file),
            len: 0,
        }
    }
}

impl ByteSink for DiskSink {
    fn push(&mut self, byte: u8) -> Result<()> {
        self.file.write_all(&[byte])?;
        self.len += 1;
        Ok(())
    }

    fn finish(&mut self) -> Result<Vec<u8>> {
        let out = self.read_back();
        self.len = 0;

        // Rewind and truncate even when the read failed, so stale bytes never
        // leak into the next partition.
        let file = self.file.get_mut();
        let reset = file.set_len(0).and_then(|_| file.seek(SeekFrom::Start(0)));

        let out = out?;
        reset?;
        Ok(out)
    }

    fn len(&self) -> usize {
        self.len
    }
}

/// Opens the sink selected by `config`.
pub fn open_sink(config: &PartitionConfig) -> Result<Box<dyn ByteSink>> {
    match config.sink {
        SinkKind::Memory => Ok(Box::new(MemorySink::new())),
        SinkKind::Disk => {
            let sink = match &config.spill_dir {
                Some(dir) => DiskSink::new_in(dir)?,
                None => DiskSink::new()?,
            };
            tracing::debug!(
                target: "partition",
                spill_dir = ?config.spill_dir,
                "opened disk-backed sink"
            );
            Ok(Box::new(sink))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytepart_types::error::PartitionError;

    fn fill_and_finish(sink: &mut dyn ByteSink, bytes: &[u8]) -> Vec<u8> {
        for &b in bytes {
            sink.push(b).unwrap();
        }
        assert_eq!(sink.len(), bytes.len());
        sink.finish().unwrap()
    }

    #[test]
    fn test_memory_sink_resets_after_finish() {
        let mut sink = MemorySink::new();
        assert_eq!(fill_and_finish(&mut sink, b"hello"), b"hello");
        assert!(sink.is_empty());
        assert_eq!(fill_and_finish(&mut sink, b"xy"), b"xy");
        assert_eq!(sink.finish().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_disk_sink_reuses_file() {
        let mut sink = DiskSink::new().unwrap();
        assert_eq!(
            fill_and_finish(&mut sink, b"a longer first partition"),
            b"a longer first partition"
        );
        // A shorter second partition must not pick up leftovers from the first.
        assert_eq!(fill_and_finish(&mut sink, b"short"), b"short");
        assert_eq!(sink.finish().unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_open_sink_honours_spill_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config = PartitionConfig {
            sink: SinkKind::Disk,
            spill_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };
        let mut sink = open_sink(&config).unwrap();
        assert_eq!(
            fill_and_finish(sink.as_mut(), &[0, 1, 2, 254]),
            vec![0, 1, 2, 254]
        );
    }

    #[test]
    fn test_open_sink_missing_dir_is_sink_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = PartitionConfig {
            sink: SinkKind::Disk,
            spill_dir: Some(dir.path().join("does-not-exist")),
            ..Default::default()
        };
        match open_sink(&config) {
            Err(PartitionError::Sink(_)) => {}
            Err(e) => panic!("expected sink error, got {e}"),
            Ok(_) => panic!("expected sink error"),
        }
    }
}

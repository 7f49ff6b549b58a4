//! Byte source abstraction for frame scanning
//!
//! The synchronizer consumes bytes through the [`ByteSource`] trait: forward
//! reads plus a bounded backward seek used for re-synchronization after a
//! suffix mismatch or checksum failure. [`StreamSource`] is the concrete
//! implementation shipped with the crate; it loads the capture into memory
//! at construction time and tracks a cursor, so seeking is O(1).
//!
//! End-of-data is reported as [`FrameError::EndOfData`], not as a short
//! read: `read_bytes(n)` either yields exactly `n` bytes or fails.

use crate::{FrameError, Result};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Sequential byte reader with bounded backward seek.
///
/// Callers guarantee by construction that `seek_back` never crosses the
/// start of the stream: the synchronizer only undoes bytes it has just
/// read. Implementations are not required to validate that.
pub trait ByteSource {
    /// Read a single byte, failing with [`FrameError::EndOfData`] when the
    /// source is exhausted.
    fn read_byte(&mut self) -> Result<u8>;

    /// Read exactly `count` bytes, failing with [`FrameError::EndOfData`]
    /// if fewer remain.
    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>>;

    /// Reposition the read cursor `count` bytes earlier.
    fn seek_back(&mut self, count: usize) -> Result<()>;
}

/// In-memory byte source backed by a capture file or a byte buffer.
#[derive(Debug)]
pub struct StreamSource {
    data: Vec<u8>,
    position: usize,
    path: PathBuf,
}

impl StreamSource {
    /// Open a capture file for analysis.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(&path)
            .map_err(|e| FrameError::file_error(path.as_ref().to_path_buf(), e))?;

        let mut data = Vec::new();
        file.read_to_end(&mut data)
            .map_err(|e| FrameError::file_error(path.as_ref().to_path_buf(), e))?;

        Ok(Self { data, position: 0, path: path.as_ref().to_path_buf() })
    }

    /// Create a source over an in-memory buffer (for testing).
    pub fn from_bytes(data: impl Into<Vec<u8>>) -> Self {
        Self { data: data.into(), position: 0, path: PathBuf::from("<memory>") }
    }

    /// Total number of bytes in the source.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the source holds no data at all.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current cursor position.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The path this source was opened from.
    pub fn file_path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for StreamSource {
    fn read_byte(&mut self) -> Result<u8> {
        let byte = *self.data.get(self.position).ok_or(FrameError::EndOfData)?;
        self.position += 1;
        Ok(byte)
    }

    fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let end = self.position.checked_add(count).ok_or(FrameError::EndOfData)?;
        if end > self.data.len() {
            return Err(FrameError::EndOfData);
        }

        let bytes = self.data[self.position..end].to_vec();
        self.position = end;
        Ok(bytes)
    }

    fn seek_back(&mut self, count: usize) -> Result<()> {
        self.position = self.position.checked_sub(count).ok_or_else(|| {
            FrameError::seek_error(count, format!("cursor at {} cannot move back", self.position))
        })?;
        Ok(())
    }
}

//! Byte-stream bridge contract consumed by the demuxing layer.
//!
//! Disc navigation synthesizes a flat byte stream out of a non-contiguous
//! sector layout. The consumer (an MPEG-TS or program-stream demuxer)
//! only ever sees this contract.

use crate::Result;

/// Outcome of a stream read.
///
/// End of stream is a distinct, non-error condition; I/O failures are
/// reported through `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// `n` bytes were placed at the start of the caller's buffer.
    Bytes(usize),
    /// The stream is exhausted; no bytes were produced.
    EndOfStream,
}

/// Seek addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeekMode {
    /// Absolute offset from the start of the stream.
    Start,
    /// Offset relative to the current position.
    Current,
    /// Offset relative to the end of the stream.
    End,
    /// Query the total stream size; the offset argument is ignored.
    Size,
}

/// A linearly readable, seekable byte stream over disc content.
pub trait ByteStream {
    /// Read up to `buf.len()` bytes into `buf`.
    fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome>;

    /// Reposition the stream, or query its size with [`SeekMode::Size`].
    ///
    /// Returns the new absolute position (or the total size for a size
    /// query).
    fn seek(&mut self, offset: i64, mode: SeekMode) -> Result<u64>;
}

impl<T: ByteStream + ?Sized> ByteStream for &mut T {
    fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome> {
        (**self).read(buf)
    }

    fn seek(&mut self, offset: i64, mode: SeekMode) -> Result<u64> {
        (**self).seek(offset, mode)
    }
}

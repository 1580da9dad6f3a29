//! Byte-stream bridge from a selected BluRay title to the demuxing layer.

use disc_io::{ByteStream, ReadOutcome, Result, SeekMode};

use crate::source::BdSource;

/// [`ByteStream`] over the title selected on a [`BdSource`].
///
/// The source library resolves logical title offsets to clip sectors
/// itself; every seek is keyed by absolute byte offset, so all positional
/// modes delegate the given offset unchanged.
pub struct BdByteStream<S> {
    source: S,
}

impl<S: BdSource> BdByteStream<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Consume the bridge and return the underlying source.
    pub fn into_source(self) -> S {
        self.source
    }
}

impl<S: BdSource> ByteStream for BdByteStream<S> {
    fn read(&mut self, buf: &mut [u8]) -> Result<ReadOutcome> {
        match self.source.read(buf)? {
            0 => Ok(ReadOutcome::EndOfStream),
            n => Ok(ReadOutcome::Bytes(n)),
        }
    }

    fn seek(&mut self, offset: i64, mode: SeekMode) -> Result<u64> {
        match mode {
            SeekMode::Start | SeekMode::Current | SeekMode::End => self.source.seek(offset),
            SeekMode::Size => Ok(self.source.title_size()),
        }
    }
}

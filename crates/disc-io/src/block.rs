//! Fixed-size block access over a byte-addressable backing store.

use std::io::{Read, Seek, SeekFrom};

use bytes::{Bytes, BytesMut};
use tracing::error;

use crate::{DiscIoError, Result};

/// Sector size shared by BluRay and DVD-Video media.
pub const SECTOR_SIZE: usize = 2048;

/// Convert a logical block address into a byte offset.
#[inline]
pub fn lba_to_bytes(lba: u32) -> u64 {
    lba as u64 * SECTOR_SIZE as u64
}

/// A store that can be read in whole 2048-byte sectors.
///
/// Implementations position themselves at `lba * 2048` and read as many
/// whole sectors as fit into `buf`. A short read yields fewer blocks; read
/// and seek failures surface as errors rather than truncated data.
pub trait BlockSource {
    /// Read up to `buf.len() / 2048` sectors starting at `lba`.
    ///
    /// Returns the number of whole sectors actually read, which may be
    /// fewer than requested near the end of the store. `buf` must be a
    /// whole number of sectors long.
    fn read_blocks(&mut self, lba: u32, buf: &mut [u8]) -> Result<usize>;

    /// Read `block_count` sectors starting at `lba` into an owned buffer.
    ///
    /// The returned buffer holds only the sectors actually read.
    fn read_blocks_bytes(&mut self, lba: u32, block_count: usize) -> Result<Bytes> {
        let mut buf = BytesMut::zeroed(block_count * SECTOR_SIZE);
        let blocks = self.read_blocks(lba, &mut buf)?;
        buf.truncate(blocks * SECTOR_SIZE);
        Ok(buf.freeze())
    }
}

impl<T: BlockSource + ?Sized> BlockSource for &mut T {
    fn read_blocks(&mut self, lba: u32, buf: &mut [u8]) -> Result<usize> {
        (**self).read_blocks(lba, buf)
    }
}

impl<T: BlockSource + ?Sized> BlockSource for Box<T> {
    fn read_blocks(&mut self, lba: u32, buf: &mut [u8]) -> Result<usize> {
        (**self).read_blocks(lba, buf)
    }
}

/// [`BlockSource`] adapter over any `Read + Seek` input, such as a disc
/// image file or an in-memory cursor.
pub struct ReadSeekSource<R> {
    inner: R,
}

impl<R: Read + Seek> ReadSeekSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Consume the adapter and return the underlying input.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read + Seek> BlockSource for ReadSeekSource<R> {
    fn read_blocks(&mut self, lba: u32, buf: &mut [u8]) -> Result<usize> {
        if buf.len() % SECTOR_SIZE != 0 {
            return Err(DiscIoError::UnalignedBuffer(buf.len()));
        }

        let offset = lba_to_bytes(lba);
        if let Err(err) = self.inner.seek(SeekFrom::Start(offset)) {
            error!(offset, "failed to seek backing store");
            return Err(err.into());
        }

        // Reads are floored to whole sectors; a trailing partial sector is
        // not handed to the caller.
        let mut read_total = 0;
        while read_total < buf.len() {
            match self.inner.read(&mut buf[read_total..]) {
                Ok(0) => break,
                Ok(n) => read_total += n,
                Err(err) => {
                    error!(
                        offset,
                        requested = buf.len(),
                        "failed to read from backing store"
                    );
                    return Err(err.into());
                }
            }
        }

        Ok(read_total / SECTOR_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn image(sectors: usize) -> Vec<u8> {
        // Each sector starts with its own index for easy verification.
        let mut data = vec![0u8; sectors * SECTOR_SIZE];
        for (i, sector) in data.chunks_mut(SECTOR_SIZE).enumerate() {
            sector[0] = i as u8;
        }
        data
    }

    #[test]
    fn test_reads_requested_blocks() {
        let mut source = ReadSeekSource::new(Cursor::new(image(8)));
        let mut buf = vec![0u8; 2 * SECTOR_SIZE];

        let blocks = source.read_blocks(3, &mut buf).unwrap();
        assert_eq!(blocks, 2);
        assert_eq!(buf[0], 3);
        assert_eq!(buf[SECTOR_SIZE], 4);
    }

    #[test]
    fn test_short_read_floors_to_whole_blocks() {
        // 4 whole sectors plus half a sector of trailing data.
        let mut data = image(4);
        data.extend_from_slice(&vec![0xAAu8; SECTOR_SIZE / 2]);
        let mut source = ReadSeekSource::new(Cursor::new(data));

        let mut buf = vec![0u8; 3 * SECTOR_SIZE];
        let blocks = source.read_blocks(3, &mut buf).unwrap();
        assert_eq!(blocks, 1);
    }

    #[test]
    fn test_read_past_end_yields_zero_blocks() {
        let mut source = ReadSeekSource::new(Cursor::new(image(2)));
        let mut buf = vec![0u8; SECTOR_SIZE];
        assert_eq!(source.read_blocks(10, &mut buf).unwrap(), 0);
    }

    #[test]
    fn test_rejects_unaligned_buffer() {
        let mut source = ReadSeekSource::new(Cursor::new(image(2)));
        let mut buf = vec![0u8; SECTOR_SIZE + 1];
        assert!(matches!(
            source.read_blocks(0, &mut buf),
            Err(DiscIoError::UnalignedBuffer(_))
        ));
    }

    #[test]
    fn test_read_blocks_bytes_truncates() {
        let mut source = ReadSeekSource::new(Cursor::new(image(3)));
        let data = source.read_blocks_bytes(2, 4).unwrap();
        assert_eq!(data.len(), SECTOR_SIZE);
        assert_eq!(data[0], 2);
    }
}

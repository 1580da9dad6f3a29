//! Error types for sector-level disc I/O.

use thiserror::Error;

/// Errors that can occur while reading from or seeking a disc source.
#[derive(Error, Debug)]
pub enum DiscIoError {
    /// An I/O error from the backing store.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The provided buffer is not a whole number of sectors.
    #[error("buffer of {0} bytes is not a multiple of the sector size")]
    UnalignedBuffer(usize),

    /// The stream does not support the requested seek mode.
    #[error("seek mode {0:?} is not supported by this stream")]
    SeekUnsupported(crate::stream::SeekMode),
}

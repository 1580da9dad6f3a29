//! Sector-level I/O primitives shared by the optical-disc navigation crates.
//!
//! Both BluRay and DVD address their backing store in fixed 2048-byte
//! sectors. This crate provides the [`BlockSource`] capability for pulling
//! whole sectors out of any byte-addressable store, a [`ReadSeekSource`]
//! adapter over standard `Read + Seek` inputs, and the [`ByteStream`]
//! contract consumed by the demuxing layer above.

pub mod block;
pub mod error;
pub mod stream;

pub use block::{BlockSource, ReadSeekSource, SECTOR_SIZE, lba_to_bytes};
pub use error::DiscIoError;
pub use stream::{ByteStream, ReadOutcome, SeekMode};

/// Result type for disc I/O operations.
pub type Result<T> = std::result::Result<T, DiscIoError>;

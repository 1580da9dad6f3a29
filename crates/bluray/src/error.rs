//! Error types for BluRay navigation.

use thiserror::Error;

/// Errors that can occur while opening or reading a BluRay title.
#[derive(Error, Debug)]
pub enum BlurayError {
    /// An I/O error from the backing store.
    #[error(transparent)]
    Io(#[from] disc_io::DiscIoError),

    /// No title on the disc met the relevance threshold.
    #[error("no usable title found on disc")]
    NoUsableTitle,

    /// The source library rejected the title selection.
    #[error("title selection rejected for title {0}")]
    TitleSelectRejected(u32),

    /// The source library rejected the playlist selection.
    #[error("playlist selection rejected for playlist {0}")]
    PlaylistSelectRejected(u32),

    /// The transport-stream demuxer failed to open the title stream.
    #[error("demuxer failed to open title stream: {0}")]
    Demux(String),
}

//! BluRay disc navigation: title selection, playlist/clip resolution and
//! elementary-stream metadata mapping.
//!
//! The native BluRay library that decodes the on-disc BDMV structures is a
//! collaborator behind the [`BdSource`] trait; the MPEG-TS demuxer that
//! consumes the synthesized byte stream sits behind [`TsDemuxer`]. This
//! crate owns everything in between: the selection policy, the two-step
//! title/playlist selection, chapter extraction, the flat stream-descriptor
//! list and the PID-keyed language merge.

pub mod bridge;
pub mod catalog;
pub mod container;
pub mod error;
pub mod merge;
pub mod probe;
pub mod source;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use bridge::BdByteStream;
pub use catalog::select_title;
pub use container::{
    BlurayContainer, BlurayOpenOptions, Chapter, MediaStream, Program, TsDemuxer, TsLayout,
    TsProgramInfo, TsStreamInfo,
};
pub use error::BlurayError;
pub use merge::{apply_language_tags, find_descriptor_by_pid};
pub use probe::{PROBE_SCORE_EXTENSION, probe_score};
pub use source::BdSource;
pub use types::{ChapterInfo, ClipInfo, StreamDescriptor, TICKS_PER_SECOND, TitleInfo};

/// Result type for BluRay navigation operations.
pub type Result<T> = std::result::Result<T, BlurayError>;

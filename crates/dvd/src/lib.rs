//! DVD-Video disc navigation: VMG/VTS tables, program-chain resolution
//! and the cell-sequencing read cursor.
//!
//! The library that decodes on-disc IFO files into in-memory tables is a
//! collaborator behind the [`DvdReader`] trait; this crate interprets
//! those tables. On-disc title, program and cell numbers are 1-based;
//! every conversion to 0-based array indices happens inside the model
//! accessors in [`ifo`], so navigation code only ever sees 0-based
//! indices.

pub mod error;
pub mod ifo;
pub mod nav;
pub mod reader;

pub use error::DvdError;
pub use ifo::{
    BlockMode, BlockType, Cell, DvdTime, PartOfTitle, ProgramChain, TitleEntry, TitleParts,
    VideoManager, VideoTitleSet, bcd_to_decimal,
};
pub use nav::{DvdOpenOptions, DvdSession, NavigationCursor};
pub use reader::DvdReader;

/// Result type for DVD navigation operations.
pub type Result<T> = std::result::Result<T, DvdError>;

/// URL scheme prefix claimed by the DVD protocol layer.
pub const PROTOCOL_PREFIX: &str = "dvd:";

/// Strip the `dvd:` scheme from an input path, if present.
pub fn strip_protocol_prefix(path: &str) -> &str {
    path.strip_prefix(PROTOCOL_PREFIX).unwrap_or(path)
}

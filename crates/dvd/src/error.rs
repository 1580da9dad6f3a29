//! Error types for DVD navigation.

use thiserror::Error;

/// Errors that can occur while opening or reading a DVD title.
#[derive(Error, Debug)]
pub enum DvdError {
    /// An I/O error from the backing store.
    #[error(transparent)]
    Io(#[from] disc_io::DiscIoError),

    /// The collaborator failed to decode an IFO file.
    #[error("failed to open IFO for title set {0}")]
    IfoOpen(u8),

    /// The collaborator failed to open the title VOBs.
    #[error("failed to open title VOBs for title set {0}")]
    VobsOpen(u8),

    /// No playable title was found during enumeration.
    #[error("no playable title found on disc")]
    NoUsableTitle,

    /// The requested title does not exist on the disc.
    #[error("invalid title {title}, disc has {count} title(s)")]
    InvalidTitle { title: usize, count: usize },

    /// The selected title's VTS-relative title number is out of bounds.
    #[error("title {title} has out-of-bounds VTS title number {vts_ttn}")]
    InvalidVtsTitleNumber { title: usize, vts_ttn: u8 },

    /// The requested angle exceeds the title's declared angle count.
    #[error("invalid angle {angle}, title has {count} angle(s)")]
    InvalidAngle { angle: usize, count: u8 },

    /// A part-of-title index is not present in the VTS part table.
    #[error("part-of-title {part} out of range for VTS title {vts_title}")]
    PartOutOfRange { vts_title: usize, part: usize },

    /// A referenced program chain is not in the VTS PGC table.
    #[error("program chain {pgc} out of range")]
    ProgramChainOutOfRange { pgc: u16 },

    /// A program number is not in the PGC's program map.
    #[error("program {program} out of range in program map")]
    ProgramOutOfRange { program: u16 },

    /// A referenced cell is not in the PGC's cell table.
    #[error("cell {cell} out of range in program chain")]
    CellOutOfRange { cell: usize },
}

//! In-memory view of the decoded IFO tables.
//!
//! The Video Manager (VMG) carries the disc-global title table; each
//! Video Title Set (VTS) carries the part-of-title table and the program
//! chains for its titles. All numbers stored here keep their on-disc
//! 1-based values; the accessor methods perform the 0-based re-indexing
//! so callers never mix the two.

use crate::{DvdError, Result};

/// Decode one BCD byte (`tens` nibble, `ones` nibble) to decimal.
#[inline]
pub fn bcd_to_decimal(byte: u8) -> u32 {
    (((byte & 0xf0) >> 4) * 10 + (byte & 0x0f)) as u32
}

/// BCD-encoded playback time as stored in a PGC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DvdTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub frame: u8,
}

impl DvdTime {
    /// Total playback time in whole seconds.
    pub fn as_seconds(&self) -> u64 {
        (bcd_to_decimal(self.hour) as u64) * 3600
            + (bcd_to_decimal(self.minute) as u64) * 60
            + bcd_to_decimal(self.second) as u64
    }

    /// Total playback time in milliseconds.
    pub fn as_millis(&self) -> u64 {
        self.as_seconds() * 1000
    }
}

/// Cell position within an angle block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockMode {
    /// Not part of any block.
    #[default]
    Normal,
    /// First cell of an angle block.
    FirstCell,
    /// Interior cell of an angle block.
    InBlock,
    /// Terminal cell of an angle block.
    LastCell,
}

/// Cell block kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockType {
    #[default]
    Normal,
    /// Member of a multi-angle block.
    Angle,
}

/// A contiguous sector range within a program chain.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub first_sector: u32,
    pub last_sector: u32,
    pub block_mode: BlockMode,
    pub block_type: BlockType,
}

impl Cell {
    pub fn normal(first_sector: u32, last_sector: u32) -> Self {
        Self {
            first_sector,
            last_sector,
            block_mode: BlockMode::Normal,
            block_type: BlockType::Normal,
        }
    }

    pub fn angle(first_sector: u32, last_sector: u32, block_mode: BlockMode) -> Self {
        Self {
            first_sector,
            last_sector,
            block_mode,
            block_type: BlockType::Angle,
        }
    }
}

/// A program chain: ordered cells plus the program-number-to-cell map.
#[derive(Debug, Clone)]
pub struct ProgramChain {
    /// Total playback time, BCD-encoded.
    pub playback_time: DvdTime,
    /// On-disc program map: 1-based cell number per 1-based program.
    pub program_map: Vec<u8>,
    pub cells: Vec<Cell>,
}

impl ProgramChain {
    /// Resolve a 1-based program number to the 0-based index of its
    /// entry cell.
    pub fn entry_cell_for_program(&self, program_number: u16) -> Result<usize> {
        let cell_number = self
            .program_map
            .get(program_number.checked_sub(1).ok_or(DvdError::ProgramOutOfRange {
                program: program_number,
            })? as usize)
            .copied()
            .ok_or(DvdError::ProgramOutOfRange {
                program: program_number,
            })?;
        let cell = (cell_number as usize)
            .checked_sub(1)
            .ok_or(DvdError::CellOutOfRange { cell: 0 })?;
        if cell >= self.cells.len() {
            return Err(DvdError::CellOutOfRange { cell });
        }
        Ok(cell)
    }

    /// Cell at a 0-based index.
    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }
}

/// One part-of-title entry: which PGC and which program within it.
#[derive(Debug, Clone, Copy)]
pub struct PartOfTitle {
    /// 1-based PGC number within the VTS.
    pub pgc_number: u16,
    /// 1-based program number within that PGC.
    pub program_number: u16,
}

/// Part table of one VTS-relative title.
#[derive(Debug, Clone, Default)]
pub struct TitleParts {
    pub parts: Vec<PartOfTitle>,
}

/// Decoded Video Title Set tables.
#[derive(Debug, Clone, Default)]
pub struct VideoTitleSet {
    /// Whether the VTS attribute table was present and valid.
    pub has_title_info: bool,
    /// Part-of-title tables, indexed by 0-based VTS-relative title.
    pub part_table: Vec<TitleParts>,
    pub program_chains: Vec<ProgramChain>,
}

impl VideoTitleSet {
    /// A VTS with a missing attribute table or an empty PGC table cannot
    /// be navigated; its titles are skipped during enumeration.
    pub fn is_navigable(&self) -> bool {
        self.has_title_info && !self.program_chains.is_empty()
    }

    /// Part entry for a 0-based VTS-relative title and 0-based part index.
    pub fn part(&self, vts_title_index: usize, part_index: usize) -> Result<&PartOfTitle> {
        self.part_table
            .get(vts_title_index)
            .and_then(|t| t.parts.get(part_index))
            .ok_or(DvdError::PartOutOfRange {
                vts_title: vts_title_index,
                part: part_index,
            })
    }

    /// Program chain for a 1-based PGC number.
    pub fn program_chain(&self, pgc_number: u16) -> Result<&ProgramChain> {
        pgc_number
            .checked_sub(1)
            .and_then(|i| self.program_chains.get(i as usize))
            .ok_or(DvdError::ProgramChainOutOfRange { pgc: pgc_number })
    }

    /// 0-based index of a 1-based PGC number.
    pub fn program_chain_index(&self, pgc_number: u16) -> Result<usize> {
        let index = pgc_number
            .checked_sub(1)
            .ok_or(DvdError::ProgramChainOutOfRange { pgc: pgc_number })?
            as usize;
        if index >= self.program_chains.len() {
            return Err(DvdError::ProgramChainOutOfRange { pgc: pgc_number });
        }
        Ok(index)
    }
}

/// Disc-global title table entry.
#[derive(Debug, Clone, Copy)]
pub struct TitleEntry {
    /// 1-based title number within its VTS.
    pub vts_ttn: u8,
    /// Title set this title lives in.
    pub title_set_nr: u8,
    /// Declared number of angles.
    pub nr_of_angles: u8,
    /// Declared number of parts (chapters).
    pub nr_of_ptts: u16,
}

impl TitleEntry {
    /// 0-based VTS-relative title index.
    pub fn vts_title_index(&self) -> usize {
        self.vts_ttn as usize - 1
    }
}

/// Decoded Video Manager tables.
#[derive(Debug, Clone, Default)]
pub struct VideoManager {
    pub title_table: Vec<TitleEntry>,
    /// Number of title sets on the disc.
    pub nr_of_title_sets: u8,
}

impl VideoManager {
    pub fn title_count(&self) -> usize {
        self.title_table.len()
    }

    /// Title entry at a 0-based index.
    pub fn title(&self, title_index: usize) -> Result<&TitleEntry> {
        self.title_table.get(title_index).ok_or(DvdError::InvalidTitle {
            title: title_index,
            count: self.title_table.len(),
        })
    }

    /// Whether an entry's VTS-relative title number is in the valid
    /// 1-based range.
    pub fn vts_ttn_in_range(&self, entry: &TitleEntry) -> bool {
        entry.vts_ttn >= 1 && entry.vts_ttn as usize <= self.title_count()
    }
}

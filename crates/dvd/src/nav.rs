//! Program-chain navigation and the cell-sequencing read cursor.

use disc_io::{BlockSource, ByteStream, DiscIoError, ReadOutcome, SECTOR_SIZE, SeekMode};
use tracing::{error, info, trace, warn};

use crate::ifo::{BlockMode, BlockType, ProgramChain, TitleEntry, VideoManager, VideoTitleSet};
use crate::reader::DvdReader;
use crate::{DvdError, Result};

/// Options controlling title and angle selection at open.
#[derive(Debug, Clone, Copy, Default)]
pub struct DvdOpenOptions {
    /// Explicit title index; `None` selects the longest title.
    pub title: Option<usize>,
    /// Camera angle; 0 is the base angle.
    pub angle: usize,
}

/// Mutable per-session navigation state, owned by the session and
/// mutated only by the cell sequencer.
#[derive(Debug, Clone, Copy)]
pub struct NavigationCursor {
    /// Selected title index (0-based).
    pub title: usize,
    /// Selected angle (0 = base).
    pub angle: usize,
    /// 0-based index of the active PGC in the session VTS.
    pub pgc_index: usize,
    /// 0-based index of the active cell.
    pub current_cell: usize,
    pub start_sector: u32,
    pub current_sector: u32,
    pub end_sector: u32,
}

/// An opened DVD title: the session VTS, the title VOBs and the read
/// cursor. Dropping the session releases every handle.
pub struct DvdSession<R: DvdReader> {
    vobs: R::Vobs,
    vmg: VideoManager,
    vts: VideoTitleSet,
    cursor: NavigationCursor,
}

impl<R: DvdReader> DvdSession<R> {
    /// Open a navigation session: enumerate titles, select one, and
    /// position the cursor at its first cell.
    pub fn open(reader: &mut R, options: &DvdOpenOptions) -> Result<Self> {
        if let Some(volume_id) = reader.volume_id() {
            info!(volume_id = %volume_id, "opened disc volume");
        }

        let vmg = reader.open_vmg()?;
        let num_titles = vmg.title_count();
        info!(num_titles, "usable titles");

        if let Some(title) = options.title {
            if title >= num_titles {
                error!(title, "invalid title id");
                return Err(DvdError::InvalidTitle {
                    title,
                    count: num_titles,
                });
            }
        }

        // Enumerate every title's duration to pick the longest fallback.
        // Each VTS is opened transiently and dropped before moving on.
        let mut longest: Option<(usize, u64)> = None;
        for vts_nr in 1..=vmg.nr_of_title_sets {
            for (title_nr, entry) in vmg.title_table.iter().enumerate() {
                if entry.title_set_nr != vts_nr {
                    continue;
                }

                let vts = reader.open_vts(vts_nr)?;
                if !vts.is_navigable() {
                    trace!(title = title_nr, "skipping title without VTS attributes or PGC table");
                    continue;
                }
                if !vmg.vts_ttn_in_range(entry) {
                    warn!(
                        title = title_nr,
                        vts_ttn = entry.vts_ttn,
                        "skipping title with out-of-bounds VTS title number"
                    );
                    continue;
                }

                let duration_ms = match title_duration_ms(&vts, entry) {
                    Ok(ms) => ms,
                    Err(err) => {
                        warn!(title = title_nr, %err, "skipping title with inconsistent tables");
                        continue;
                    }
                };
                let secs = duration_ms / 1000;
                info!(
                    title = format_args!("{title_nr:03}"),
                    duration = format_args!(
                        "{}:{:02}:{:02}",
                        secs / 3600,
                        (secs % 3600) / 60,
                        secs % 60
                    ),
                    parts = entry.nr_of_ptts,
                    "title"
                );

                if longest.is_none_or(|(_, best)| best < duration_ms) {
                    longest = Some((title_nr, duration_ms));
                }
            }
        }

        let title_nr = match options.title {
            Some(title) => title,
            None => longest.ok_or(DvdError::NoUsableTitle)?.0,
        };

        let entry = *vmg.title(title_nr)?;
        if !vmg.vts_ttn_in_range(&entry) {
            error!(
                title = title_nr,
                vts_ttn = entry.vts_ttn,
                "selected title is not valid"
            );
            return Err(DvdError::InvalidVtsTitleNumber {
                title: title_nr,
                vts_ttn: entry.vts_ttn,
            });
        }
        info!(title = title_nr, "selected title");

        if options.angle > 0 && options.angle >= entry.nr_of_angles as usize {
            error!(
                angle = options.angle,
                angles = entry.nr_of_angles,
                "requested angle exceeds the title's angle count"
            );
            return Err(DvdError::InvalidAngle {
                angle: options.angle,
                count: entry.nr_of_angles,
            });
        }

        let vts = reader.open_vts(entry.title_set_nr)?;
        let vobs = reader.open_title_vobs(entry.title_set_nr)?;

        let cursor = program_chain_cursor(&vmg, &vts, title_nr, 0, options.angle)?;
        Ok(Self {
            vobs,
            vmg,
            vts,
            cursor,
        })
    }

    /// Current navigation state.
    pub fn cursor(&self) -> &NavigationCursor {
        &self.cursor
    }

    /// The disc-global title table.
    pub fn video_manager(&self) -> &VideoManager {
        &self.vmg
    }

    /// The session's Video Title Set.
    pub fn video_title_set(&self) -> &VideoTitleSet {
        &self.vts
    }

    /// Read title data at the cursor, in whole sectors.
    ///
    /// When the cursor has stepped past the active cell's last sector the
    /// next playable cell is resolved first; with no cell left this is
    /// end of stream. A read is not clipped at the cell boundary: the
    /// overshoot is handled by the boundary check on the next call.
    pub fn read_stream(&mut self, buf: &mut [u8]) -> disc_io::Result<ReadOutcome> {
        let num_blocks = buf.len() / SECTOR_SIZE;
        if num_blocks == 0 {
            return Err(DiscIoError::UnalignedBuffer(buf.len()));
        }

        let pgc = &self.vts.program_chains[self.cursor.pgc_index];
        if self.cursor.current_sector >= self.cursor.end_sector {
            let Some(next) = next_cell(pgc, self.cursor.current_cell) else {
                return Ok(ReadOutcome::EndOfStream);
            };
            let cell = pgc.cells[next];
            trace!(
                cell = next,
                first_sector = cell.first_sector,
                last_sector = cell.last_sector,
                "advanced to next cell"
            );
            self.cursor.current_cell = next;
            self.cursor.start_sector = cell.first_sector;
            self.cursor.current_sector = cell.first_sector;
            self.cursor.end_sector = cell.last_sector;
        }

        let aligned = num_blocks * SECTOR_SIZE;
        let blocks = self.vobs.read_blocks(self.cursor.current_sector, &mut buf[..aligned])?;
        if blocks == 0 {
            error!(
                sector = self.cursor.current_sector,
                num_blocks, "block read returned no data"
            );
            return Err(DiscIoError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                "no blocks read from title stream",
            )));
        }
        self.cursor.current_sector += blocks as u32;
        Ok(ReadOutcome::Bytes(blocks * SECTOR_SIZE))
    }
}

impl<R: DvdReader> ByteStream for DvdSession<R> {
    fn read(&mut self, buf: &mut [u8]) -> disc_io::Result<ReadOutcome> {
        self.read_stream(buf)
    }

    fn seek(&mut self, _offset: i64, mode: SeekMode) -> disc_io::Result<u64> {
        // DVD title streams are read sequentially; no byte-accurate
        // repositioning is available and the total size is not tracked.
        Err(DiscIoError::SeekUnsupported(mode))
    }
}

/// Playback duration of a title in milliseconds, taken from the PGC
/// referenced by the title's first part.
fn title_duration_ms(vts: &VideoTitleSet, entry: &TitleEntry) -> Result<u64> {
    let part = vts.part(entry.vts_title_index(), 0)?;
    let pgc = vts.program_chain(part.pgc_number)?;
    Ok(pgc.playback_time.as_millis())
}

/// Resolve the cursor for a title's part-of-title entry.
fn program_chain_cursor(
    vmg: &VideoManager,
    vts: &VideoTitleSet,
    title_nr: usize,
    part_index: usize,
    angle: usize,
) -> Result<NavigationCursor> {
    let entry = vmg.title(title_nr)?;
    let part = vts.part(entry.vts_title_index(), part_index)?;
    let pgc_index = vts.program_chain_index(part.pgc_number)?;
    let pgc = &vts.program_chains[pgc_index];

    let mut cell = pgc.entry_cell_for_program(part.program_number)?;
    // In an angle block the entry cell is the base angle; the requested
    // angle lives at the block-relative offset.
    if pgc
        .cell(cell)
        .ok_or(DvdError::CellOutOfRange { cell })?
        .block_type
        == BlockType::Angle
    {
        cell += angle;
    }

    let info = pgc.cell(cell).ok_or(DvdError::CellOutOfRange { cell })?;
    Ok(NavigationCursor {
        title: title_nr,
        angle,
        pgc_index,
        current_cell: cell,
        start_sector: info.first_sector,
        current_sector: info.first_sector,
        end_sector: info.last_sector,
    })
}

/// Next playable cell after `current_cell`, or `None` at end of title.
///
/// Within an angle block only the angle-selected member plays, and the
/// cursor already rests on that member. The scan skips the remainder of
/// the block by locating its terminal cell before the normal +1
/// advancement.
fn next_cell(pgc: &ProgramChain, current_cell: usize) -> Option<usize> {
    let mut next = current_cell;

    if pgc.cell(next)?.block_type == BlockType::Angle {
        while next < pgc.cells.len() && pgc.cells[next].block_mode != BlockMode::LastCell {
            next += 1;
        }
    }

    next += 1;
    if next >= pgc.cells.len() {
        return None;
    }
    Some(next)
}

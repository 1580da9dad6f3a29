//! Collaborator seam for the native BluRay library.

use crate::types::TitleInfo;

/// The native BluRay source: decodes BDMV navigation structures and
/// produces the title byte stream after a title and playlist have been
/// selected.
///
/// A concrete implementation is expected to pull raw sectors through a
/// [`disc_io::BlockSource`], matching the sector-read callback contract
/// (`lba` + block count, 2048-byte blocks).
pub trait BdSource {
    /// Disc display name, if the disc declares one.
    fn disc_name(&self) -> Option<&str>;

    /// Number of titles at least `min_duration_secs` seconds long.
    fn relevant_title_count(&mut self, min_duration_secs: u32) -> u32;

    /// The disc's advertised main title, if declared.
    fn main_title(&self) -> Option<u32>;

    /// Snapshot of the title at `idx` (0-based, within the relevant set).
    fn title_info(&self, idx: u32) -> crate::Result<TitleInfo>;

    /// Select the title to play. Returns `false` on rejection.
    fn select_title(&mut self, idx: u32) -> bool;

    /// Select the playlist backing the selected title. Returns `false`
    /// on rejection. Both this and [`select_title`](Self::select_title)
    /// are required before reading.
    fn select_playlist(&mut self, playlist: u32) -> bool;

    /// Read title-stream bytes. `Ok(0)` means the title is exhausted.
    fn read(&mut self, buf: &mut [u8]) -> disc_io::Result<usize>;

    /// Reposition the title stream to an absolute byte offset.
    fn seek(&mut self, offset: i64) -> disc_io::Result<u64>;

    /// Total size of the selected title in bytes.
    fn title_size(&self) -> u64;
}

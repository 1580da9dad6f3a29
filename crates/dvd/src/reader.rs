//! Collaborator seam for the native DVD library.

use disc_io::BlockSource;

use crate::Result;
use crate::ifo::{VideoManager, VideoTitleSet};

/// The native DVD source: opens the disc, decodes IFO files into the
/// in-memory tables and exposes title VOB data as sector reads.
///
/// All handles are values: dropping a [`VideoTitleSet`] or a
/// [`Vobs`](Self::Vobs) releases the underlying resource, so partial
/// open failures cannot leak handles.
pub trait DvdReader {
    /// Sector-addressable view over a title set's VOB data.
    type Vobs: BlockSource;

    /// UDF volume identifier of the disc, when available.
    fn volume_id(&self) -> Option<String>;

    /// Decode the Video Manager IFO.
    fn open_vmg(&mut self) -> Result<VideoManager>;

    /// Decode the IFO of title set `title_set_nr` (1-based).
    fn open_vts(&mut self, title_set_nr: u8) -> Result<VideoTitleSet>;

    /// Open the title VOBs of title set `title_set_nr` for sector reads.
    fn open_title_vobs(&mut self, title_set_nr: u8) -> Result<Self::Vobs>;
}

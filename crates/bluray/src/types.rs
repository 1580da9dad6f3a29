//! Read-only title, chapter and clip snapshots fetched from the source
//! library during enumeration and open.

/// Timebase of all BluRay title timestamps (ticks per second).
pub const TICKS_PER_SECOND: u64 = 90_000;

/// Snapshot of a single disc title.
#[derive(Debug, Clone)]
pub struct TitleInfo {
    /// Title index on the disc.
    pub idx: u32,
    /// Playlist (`.mpls`) number backing this title.
    pub playlist: u32,
    /// Total playback duration in 90 kHz ticks.
    pub duration: u64,
    /// Chapter table of the title.
    pub chapters: Vec<ChapterInfo>,
    /// Clips of the playlist, in playback order.
    pub clips: Vec<ClipInfo>,
}

impl TitleInfo {
    /// Whole seconds of playback time.
    pub fn duration_secs(&self) -> u64 {
        self.duration / TICKS_PER_SECOND
    }
}

/// A chapter entry of a title, in 90 kHz ticks.
#[derive(Debug, Clone, Copy)]
pub struct ChapterInfo {
    pub idx: u32,
    pub start: u64,
    pub duration: u64,
}

/// A playback segment of a playlist, carrying per-stream descriptors.
#[derive(Debug, Clone, Default)]
pub struct ClipInfo {
    pub audio_streams: Vec<StreamDescriptor>,
    pub secondary_audio_streams: Vec<StreamDescriptor>,
    pub graphics_streams: Vec<StreamDescriptor>,
}

impl ClipInfo {
    /// Flatten the clip's descriptor arrays into a single list.
    ///
    /// Order is audio, secondary audio, graphics. The order carries no
    /// meaning beyond making PID lookup deterministic; PIDs are expected
    /// to be unique within a clip.
    pub fn flat_descriptors(&self) -> Vec<StreamDescriptor> {
        let mut descriptors = Vec::with_capacity(
            self.audio_streams.len()
                + self.secondary_audio_streams.len()
                + self.graphics_streams.len(),
        );
        descriptors.extend_from_slice(&self.audio_streams);
        descriptors.extend_from_slice(&self.secondary_audio_streams);
        descriptors.extend_from_slice(&self.graphics_streams);
        descriptors
    }
}

/// An elementary-stream descriptor from a clip: transport PID plus the
/// ISO 639-2 language code, when the disc carries one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamDescriptor {
    pub pid: u16,
    pub language: Option<String>,
}

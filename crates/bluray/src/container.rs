//! Container open flow: selection, chapters, demux hand-off and stream
//! metadata assembly.

use disc_io::ByteStream;
use tracing::{error, info};

use crate::bridge::BdByteStream;
use crate::source::BdSource;
use crate::{BlurayError, Result, catalog, merge};

/// Options controlling title selection at open.
#[derive(Debug, Clone, Copy)]
pub struct BlurayOpenOptions {
    /// Explicit title index; `None` selects automatically.
    pub title: Option<u32>,
    /// Minimum duration (seconds) for a title to be considered relevant.
    pub min_title_length: u32,
}

impl Default for BlurayOpenOptions {
    fn default() -> Self {
        Self {
            title: None,
            min_title_length: 180,
        }
    }
}

/// A container chapter spanning `[start, end)` in 90 kHz ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chapter {
    pub id: u32,
    pub start: u64,
    pub end: u64,
}

/// An exposed elementary stream, optionally tagged with a language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaStream {
    pub index: usize,
    pub pid: u16,
    pub start_time: Option<u64>,
    pub language: Option<String>,
}

/// A program copied from the demuxer's program table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    pub program_number: u16,
    pub stream_indexes: Vec<usize>,
    pub start_time: Option<u64>,
}

/// An elementary stream discovered by the transport-stream demuxer.
#[derive(Debug, Clone)]
pub struct TsStreamInfo {
    pub index: usize,
    pub pid: u16,
    pub start_time: Option<u64>,
}

/// A program discovered by the transport-stream demuxer.
#[derive(Debug, Clone)]
pub struct TsProgramInfo {
    pub program_number: u16,
    pub stream_indexes: Vec<usize>,
    pub start_time: Option<u64>,
}

/// Everything the demuxer learned from probing the title stream.
#[derive(Debug, Clone, Default)]
pub struct TsLayout {
    pub streams: Vec<TsStreamInfo>,
    pub programs: Vec<TsProgramInfo>,
}

/// The MPEG-TS demuxer collaborator. BluRay titles are always
/// transport-stream based.
pub trait TsDemuxer {
    /// Probe the synthesized title stream and report its layout.
    fn open(&mut self, input: &mut dyn ByteStream) -> std::result::Result<TsLayout, String>;
}

/// An opened BluRay title: metadata plus the byte stream feeding the
/// demuxer.
pub struct BlurayContainer<S> {
    stream: BdByteStream<S>,
    /// Disc display name, when declared.
    pub name: Option<String>,
    /// Total title duration in 90 kHz ticks.
    pub duration: u64,
    pub chapters: Vec<Chapter>,
    pub streams: Vec<MediaStream>,
    pub programs: Vec<Program>,
}

impl<S: BdSource> BlurayContainer<S> {
    /// Select a title per policy, select its playlist, and hand the
    /// synthesized byte stream to `demuxer`.
    ///
    /// Only the first clip of the playlist is consulted for stream
    /// language metadata; later clips of multi-clip playlists keep their
    /// streams untagged.
    pub fn open(
        mut source: S,
        demuxer: &mut dyn TsDemuxer,
        options: &BlurayOpenOptions,
    ) -> Result<Self> {
        let name = source.disc_name().map(str::to_owned);
        if let Some(name) = &name {
            info!(disc_name = %name, "opening bluray disc");
        }

        let title = catalog::select_title(&mut source, options.title, options.min_title_length)?;

        // Selecting the title and selecting its playlist are two
        // independent steps; both must succeed before reading.
        if !source.select_title(title) {
            error!(title, "title selection rejected by source");
            return Err(BlurayError::TitleSelectRejected(title));
        }

        let info = source.title_info(title)?;
        info!(
            title,
            playlist = format_args!("{:05}.mpls", info.playlist),
            "selected title"
        );

        if !source.select_playlist(info.playlist) {
            error!(playlist = info.playlist, "playlist selection rejected by source");
            return Err(BlurayError::PlaylistSelectRejected(info.playlist));
        }

        let chapters = info
            .chapters
            .iter()
            .map(|c| Chapter {
                id: c.idx,
                start: c.start,
                end: c.start + c.duration,
            })
            .collect();

        let descriptors = info
            .clips
            .first()
            .map(|clip| clip.flat_descriptors())
            .unwrap_or_default();

        let mut stream = BdByteStream::new(source);
        let layout = demuxer.open(&mut stream).map_err(BlurayError::Demux)?;

        let programs = layout
            .programs
            .into_iter()
            .map(|p| Program {
                program_number: p.program_number,
                stream_indexes: p.stream_indexes,
                start_time: p.start_time,
            })
            .collect();
        let streams = merge::apply_language_tags(layout.streams, &descriptors);

        Ok(Self {
            stream,
            name,
            duration: info.duration,
            chapters,
            streams,
            programs,
        })
    }

    /// The byte stream feeding the demuxer.
    pub fn stream_mut(&mut self) -> &mut BdByteStream<S> {
        &mut self.stream
    }

    /// Consume the container, keeping only the byte stream.
    pub fn into_stream(self) -> BdByteStream<S> {
        self.stream
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockBdSource;
    use crate::types::{ChapterInfo, ClipInfo, StreamDescriptor, TICKS_PER_SECOND, TitleInfo};

    struct FixedDemuxer(TsLayout);

    impl TsDemuxer for FixedDemuxer {
        fn open(&mut self, _input: &mut dyn ByteStream) -> std::result::Result<TsLayout, String> {
            Ok(self.0.clone())
        }
    }

    struct FailingDemuxer;

    impl TsDemuxer for FailingDemuxer {
        fn open(&mut self, _input: &mut dyn ByteStream) -> std::result::Result<TsLayout, String> {
            Err("no sync byte".to_owned())
        }
    }

    fn movie_title() -> TitleInfo {
        TitleInfo {
            idx: 0,
            playlist: 800,
            duration: 600 * TICKS_PER_SECOND,
            chapters: vec![
                ChapterInfo {
                    idx: 0,
                    start: 0,
                    duration: 300 * TICKS_PER_SECOND,
                },
                ChapterInfo {
                    idx: 1,
                    start: 300 * TICKS_PER_SECOND,
                    duration: 300 * TICKS_PER_SECOND,
                },
            ],
            clips: vec![ClipInfo {
                audio_streams: vec![StreamDescriptor {
                    pid: 0x1100,
                    language: Some("eng".to_owned()),
                }],
                secondary_audio_streams: Vec::new(),
                graphics_streams: vec![StreamDescriptor {
                    pid: 0x1200,
                    language: Some("fra".to_owned()),
                }],
            }],
        }
    }

    fn layout() -> TsLayout {
        TsLayout {
            streams: vec![
                TsStreamInfo {
                    index: 0,
                    pid: 0x1011,
                    start_time: Some(0),
                },
                TsStreamInfo {
                    index: 1,
                    pid: 0x1100,
                    start_time: Some(0),
                },
            ],
            programs: vec![TsProgramInfo {
                program_number: 1,
                stream_indexes: vec![0, 1],
                start_time: Some(0),
            }],
        }
    }

    #[test]
    fn test_open_merges_language_and_copies_programs() {
        let source = MockBdSource::new(vec![movie_title()], None);
        let mut demuxer = FixedDemuxer(layout());
        let container =
            BlurayContainer::open(source, &mut demuxer, &BlurayOpenOptions::default()).unwrap();

        assert_eq!(container.duration, 600 * TICKS_PER_SECOND);
        // Video stream has no clip descriptor, audio does.
        assert!(container.streams[0].language.is_none());
        assert_eq!(container.streams[1].language.as_deref(), Some("eng"));
        assert_eq!(container.programs.len(), 1);
        assert_eq!(container.programs[0].stream_indexes, vec![0, 1]);
    }

    #[test]
    fn test_chapters_span_start_to_start_plus_duration() {
        let source = MockBdSource::new(vec![movie_title()], None);
        let mut demuxer = FixedDemuxer(TsLayout::default());
        let container =
            BlurayContainer::open(source, &mut demuxer, &BlurayOpenOptions::default()).unwrap();

        assert_eq!(container.chapters.len(), 2);
        assert_eq!(container.chapters[0].start, 0);
        assert_eq!(container.chapters[0].end, 300 * TICKS_PER_SECOND);
        assert_eq!(container.chapters[1].start, container.chapters[0].end);
        // Chapter starts are monotonically non-decreasing.
        assert!(container.chapters.windows(2).all(|w| w[0].start <= w[1].start));
    }

    #[test]
    fn test_title_select_rejection_is_fatal() {
        let mut source = MockBdSource::new(vec![movie_title()], None);
        source.reject_title_select = true;
        let mut demuxer = FixedDemuxer(TsLayout::default());
        assert!(matches!(
            BlurayContainer::open(source, &mut demuxer, &BlurayOpenOptions::default()),
            Err(BlurayError::TitleSelectRejected(0))
        ));
    }

    #[test]
    fn test_playlist_select_rejection_is_fatal() {
        let mut source = MockBdSource::new(vec![movie_title()], None);
        source.reject_playlist_select = true;
        let mut demuxer = FixedDemuxer(TsLayout::default());
        assert!(matches!(
            BlurayContainer::open(source, &mut demuxer, &BlurayOpenOptions::default()),
            Err(BlurayError::PlaylistSelectRejected(800))
        ));
    }

    #[test]
    fn test_demux_failure_surfaces() {
        let source = MockBdSource::new(vec![movie_title()], None);
        assert!(matches!(
            BlurayContainer::open(source, &mut FailingDemuxer, &BlurayOpenOptions::default()),
            Err(BlurayError::Demux(_))
        ));
    }

    #[test]
    fn test_titles_without_clips_expose_untagged_streams() {
        let mut title = movie_title();
        title.clips.clear();
        let source = MockBdSource::new(vec![title], None);
        let mut demuxer = FixedDemuxer(layout());
        let container =
            BlurayContainer::open(source, &mut demuxer, &BlurayOpenOptions::default()).unwrap();
        assert!(container.streams.iter().all(|s| s.language.is_none()));
    }
}

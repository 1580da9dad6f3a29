//! PID-keyed merge of demuxed streams against clip stream descriptors.

use tracing::debug;

use crate::container::{MediaStream, TsStreamInfo};
use crate::types::StreamDescriptor;

/// Find the clip descriptor matching a transport PID.
///
/// First match wins; PIDs are expected to be unique within a clip.
pub fn find_descriptor_by_pid(descriptors: &[StreamDescriptor], pid: u16) -> Option<&StreamDescriptor> {
    descriptors.iter().find(|d| d.pid == pid)
}

/// Attach clip language tags to the demuxer's discovered streams.
///
/// Streams without a matching descriptor pass through untagged; a missing
/// match is not an error.
pub fn apply_language_tags(
    streams: Vec<TsStreamInfo>,
    descriptors: &[StreamDescriptor],
) -> Vec<MediaStream> {
    streams
        .into_iter()
        .map(|ts| {
            let language = find_descriptor_by_pid(descriptors, ts.pid)
                .and_then(|d| d.language.clone());
            if let Some(lang) = &language {
                debug!(pid = ts.pid, language = %lang, "tagged stream");
            }
            MediaStream {
                index: ts.index,
                pid: ts.pid,
                start_time: ts.start_time,
                language,
            }
        })
        .collect()
}

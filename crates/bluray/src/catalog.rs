//! Title enumeration and selection policy.

use tracing::info;

use crate::source::BdSource;
use crate::types::TICKS_PER_SECOND;
use crate::{BlurayError, Result};

/// Enumerate the relevant titles and pick the one to play.
///
/// Policy, in order:
/// 1. an explicit `title_override` is used verbatim;
/// 2. otherwise the disc's declared main title, when present;
/// 3. otherwise the longest enumerated title (first-seen wins on ties).
///
/// A disc without a single relevant title fails with
/// [`BlurayError::NoUsableTitle`].
pub fn select_title<S: BdSource>(
    source: &mut S,
    title_override: Option<u32>,
    min_title_length_secs: u32,
) -> Result<u32> {
    let title_count = source.relevant_title_count(min_title_length_secs);
    info!(title_count, "usable titles");
    if title_count < 1 {
        return Err(BlurayError::NoUsableTitle);
    }

    let main_title = source.main_title();
    info!(main_title, "main title declared by disc");

    let mut longest_title = 0;
    let mut max_duration = 0u64;
    for idx in 0..title_count {
        let title = source.title_info(idx)?;
        let secs = title.duration_secs();
        info!(
            title = title.idx,
            playlist = format_args!("{:05}.mpls", title.playlist),
            duration = format_args!("{}:{:02}:{:02}", secs / 3600, (secs % 3600) / 60, secs % 60),
            chapters = title.chapters.len(),
            "title"
        );

        if max_duration < title.duration {
            longest_title = title.idx;
            max_duration = title.duration;
        }
    }

    let selected = match title_override {
        Some(title) => title,
        None => main_title.unwrap_or(longest_title),
    };
    Ok(selected)
}

/// Convert whole seconds to 90 kHz ticks.
pub fn secs_to_ticks(secs: u64) -> u64 {
    secs * TICKS_PER_SECOND
}

//! In-memory [`BdSource`] used by the unit tests.

use crate::source::BdSource;
use crate::types::TitleInfo;

/// Mock source with a fixed title catalog and an in-memory title stream.
pub struct MockBdSource {
    pub titles: Vec<TitleInfo>,
    pub main_title: Option<u32>,
    pub disc_name: Option<String>,
    pub stream_data: Vec<u8>,
    pub reject_title_select: bool,
    pub reject_playlist_select: bool,
    position: usize,
    pub selected_title: Option<u32>,
    pub selected_playlist: Option<u32>,
}

impl MockBdSource {
    pub fn new(titles: Vec<TitleInfo>, main_title: Option<u32>) -> Self {
        Self {
            titles,
            main_title,
            disc_name: Some("TEST_DISC".to_owned()),
            stream_data: Vec::new(),
            reject_title_select: false,
            reject_playlist_select: false,
            position: 0,
            selected_title: None,
            selected_playlist: None,
        }
    }
}

impl BdSource for MockBdSource {
    fn disc_name(&self) -> Option<&str> {
        self.disc_name.as_deref()
    }

    fn relevant_title_count(&mut self, _min_duration_secs: u32) -> u32 {
        self.titles.len() as u32
    }

    fn main_title(&self) -> Option<u32> {
        self.main_title
    }

    fn title_info(&self, idx: u32) -> crate::Result<TitleInfo> {
        Ok(self.titles[idx as usize].clone())
    }

    fn select_title(&mut self, idx: u32) -> bool {
        if self.reject_title_select {
            return false;
        }
        self.selected_title = Some(idx);
        true
    }

    fn select_playlist(&mut self, playlist: u32) -> bool {
        if self.reject_playlist_select {
            return false;
        }
        self.selected_playlist = Some(playlist);
        true
    }

    fn read(&mut self, buf: &mut [u8]) -> disc_io::Result<usize> {
        let remaining = self.stream_data.len().saturating_sub(self.position);
        let n = remaining.min(buf.len());
        buf[..n].copy_from_slice(&self.stream_data[self.position..self.position + n]);
        self.position += n;
        Ok(n)
    }

    fn seek(&mut self, offset: i64) -> disc_io::Result<u64> {
        self.position = offset.max(0) as usize;
        Ok(self.position as u64)
    }

    fn title_size(&self) -> u64 {
        self.stream_data.len() as u64
    }
}

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::types::{TrackRecord, TrackTableRow};

pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

pub fn track_rows(tracks: &[TrackRecord]) -> Vec<TrackTableRow> {
    tracks
        .iter()
        .enumerate()
        .map(|(i, track)| TrackTableRow {
            position: i + 1,
            title: track.title.clone(),
            artists: track.artists.join(", "),
            album: track.album.clone(),
            duration: format_duration(track.duration_ms),
        })
        .collect()
}

pub fn spinner(message: impl Into<String>) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message.into());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}

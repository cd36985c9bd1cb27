//! Pure accessors over raw catalog payloads.
//!
//! The catalog answers with deeply nested JSON whose shape is owned by the
//! remote service. Everything that reaches into that shape lives here so it
//! can be exercised against hand-built fixtures without a network.
//!
//! Search responses:
//!
//! ```text
//! data.searchV2.tracksV2.items[].item.data
//! ```
//!
//! Playlist responses:
//!
//! ```text
//! data.playlistContents.items[].addedAt.item.data
//! data.playlistContents.items[].item.data          (fallback)
//! ```
//!
//! Track data objects carry `id`, `name`, `artistNames[]`, `albumName`,
//! `duration.totalMillis`, `images[].url` and `popularity`, any of which may
//! be missing.

use serde_json::Value;

use crate::types::{TrackRecord, UNKNOWN};

pub fn search_items(response: &Value) -> Option<&Vec<Value>> {
    response.pointer("/data/searchV2/tracksV2/items")?.as_array()
}

pub fn playlist_items(response: &Value) -> Option<&Vec<Value>> {
    response.pointer("/data/playlistContents/items")?.as_array()
}

pub fn search_track_data(item: &Value) -> Option<&Value> {
    non_empty_object(item.pointer("/item/data"))
}

/// Playlist items wrap the track either under `addedAt` or directly; the
/// wrapped location is preferred.
pub fn playlist_track_data(item: &Value) -> Option<&Value> {
    non_empty_object(item.pointer("/addedAt/item/data"))
        .or_else(|| non_empty_object(item.pointer("/item/data")))
}

/// Builds a fully populated record from a track data object, substituting
/// sentinels for every missing field.
pub fn track_record(id: String, data: &Value) -> TrackRecord {
    let artists = artist_names(data);
    let artist = match data.get("artistNames").and_then(Value::as_array) {
        Some(_) => artists.first().cloned().unwrap_or_else(|| UNKNOWN.to_string()),
        None => UNKNOWN.to_string(),
    };

    TrackRecord {
        id,
        title: str_field(data, "/name", UNKNOWN),
        artist,
        artists,
        album: str_field(data, "/albumName", UNKNOWN),
        duration_ms: data
            .pointer("/duration/totalMillis")
            .and_then(Value::as_u64)
            .unwrap_or(0),
        image_url: str_field(data, "/images/0/url", ""),
        popularity: None,
    }
}

/// Same as [`track_record`], taking the id from the payload and keeping the
/// search-only popularity score.
pub fn search_record(data: &Value) -> TrackRecord {
    let mut record = track_record(str_field(data, "/id", ""), data);
    record.popularity = Some(popularity(data));
    record
}

pub fn playlist_record(data: &Value) -> TrackRecord {
    track_record(str_field(data, "/id", ""), data)
}

pub fn popularity(data: &Value) -> u32 {
    data.get("popularity")
        .and_then(Value::as_u64)
        .map(|p| p.min(u32::MAX as u64) as u32)
        .unwrap_or(0)
}

// An absent list defaults to ["Unknown"]; a present but empty list stays empty.
fn artist_names(data: &Value) -> Vec<String> {
    match data.get("artistNames").and_then(Value::as_array) {
        Some(names) => names
            .iter()
            .filter_map(Value::as_str)
            .map(str::to_string)
            .collect(),
        None => vec![UNKNOWN.to_string()],
    }
}

fn str_field(data: &Value, pointer: &str, default: &str) -> String {
    data.pointer(pointer)
        .and_then(Value::as_str)
        .unwrap_or(default)
        .to_string()
}

fn non_empty_object(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| v.as_object().is_some_and(|o| !o.is_empty()))
}

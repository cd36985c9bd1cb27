use serde_json::{Value, json};
use spolink::spotify::extract::*;

fn full_track_data() -> Value {
    json!({
        "id": "TR1",
        "name": "Test Song",
        "artistNames": ["Test Artist", "Featured Artist"],
        "albumName": "Test Album",
        "duration": { "totalMillis": 215000 },
        "images": [
            { "url": "https://i.scdn.co/image/large" },
            { "url": "https://i.scdn.co/image/small" }
        ],
        "popularity": 61
    })
}

#[test]
fn test_track_record_full_payload() {
    let record = track_record("REQ".to_string(), &full_track_data());

    // The requested id wins over the payload id.
    assert_eq!(record.id, "REQ");
    assert_eq!(record.title, "Test Song");
    assert_eq!(record.artist, "Test Artist");
    assert_eq!(record.artists, vec!["Test Artist", "Featured Artist"]);
    assert_eq!(record.album, "Test Album");
    assert_eq!(record.duration_ms, 215000);
    assert_eq!(record.image_url, "https://i.scdn.co/image/large");
    assert_eq!(record.popularity, None);
}

#[test]
fn test_track_record_empty_artist_list() {
    let data = json!({ "name": "Solo", "artistNames": [] });
    let record = track_record("X".to_string(), &data);

    assert_eq!(record.artist, "Unknown");
    assert!(record.artists.is_empty());
}

#[test]
fn test_track_record_missing_artist_list() {
    let data = json!({ "name": "Solo" });
    let record = track_record("X".to_string(), &data);

    assert_eq!(record.artist, "Unknown");
    assert_eq!(record.artists, vec!["Unknown"]);
}

#[test]
fn test_track_record_missing_images() {
    let data = json!({ "name": "No Art" });
    assert_eq!(track_record("X".to_string(), &data).image_url, "");

    let data = json!({ "name": "No Art", "images": [] });
    assert_eq!(track_record("X".to_string(), &data).image_url, "");
}

#[test]
fn test_track_record_defaults_every_field() {
    let data = json!({ "unrelated": true });
    let record = track_record("X".to_string(), &data);

    assert_eq!(record.title, "Unknown");
    assert_eq!(record.album, "Unknown");
    assert_eq!(record.duration_ms, 0);
    assert_eq!(record.image_url, "");
}

#[test]
fn test_track_record_ignores_wrongly_typed_fields() {
    let data = json!({
        "name": 42,
        "artistNames": ["Real", 7, null],
        "duration": { "totalMillis": "long" }
    });
    let record = track_record("X".to_string(), &data);

    assert_eq!(record.title, "Unknown");
    assert_eq!(record.artists, vec!["Real"]);
    assert_eq!(record.artist, "Real");
    assert_eq!(record.duration_ms, 0);
}

#[test]
fn test_search_record_takes_payload_id_and_popularity() {
    let record = search_record(&full_track_data());
    assert_eq!(record.id, "TR1");
    assert_eq!(record.popularity, Some(61));

    let record = search_record(&json!({ "name": "Obscure" }));
    assert_eq!(record.id, "");
    assert_eq!(record.popularity, Some(0));
}

#[test]
fn test_playlist_record_has_no_popularity() {
    let record = playlist_record(&full_track_data());
    assert_eq!(record.id, "TR1");
    assert_eq!(record.popularity, None);
}

#[test]
fn test_search_items_shape() {
    let response = json!({
        "data": { "searchV2": { "tracksV2": { "items": [ { "item": { "data": { "name": "a" } } } ] } } }
    });
    assert_eq!(search_items(&response).map(Vec::len), Some(1));

    assert!(search_items(&json!({ "data": { "searchV2": {} } })).is_none());
    assert!(search_items(&json!({ "errors": [ { "message": "boom" } ] })).is_none());
    assert!(search_items(&json!({ "data": { "searchV2": { "tracksV2": { "items": {} } } } })).is_none());
}

#[test]
fn test_playlist_items_shape() {
    let response = json!({ "data": { "playlistContents": { "items": [] } } });
    assert_eq!(playlist_items(&response).map(Vec::len), Some(0));

    assert!(playlist_items(&json!({ "data": null })).is_none());
}

#[test]
fn test_search_track_data() {
    let item = json!({ "item": { "data": { "name": "a" } } });
    assert_eq!(search_track_data(&item), Some(&json!({ "name": "a" })));

    assert!(search_track_data(&json!({ "item": {} })).is_none());
    assert!(search_track_data(&json!({ "item": { "data": {} } })).is_none());
}

#[test]
fn test_playlist_track_data_prefers_added_at() {
    let item = json!({
        "addedAt": { "item": { "data": { "name": "wrapped" } } },
        "item": { "data": { "name": "direct" } }
    });
    assert_eq!(
        playlist_track_data(&item).and_then(|d| d.get("name")),
        Some(&json!("wrapped"))
    );
}

#[test]
fn test_playlist_track_data_falls_back_to_item() {
    let item = json!({ "item": { "data": { "name": "direct" } } });
    assert_eq!(
        playlist_track_data(&item).and_then(|d| d.get("name")),
        Some(&json!("direct"))
    );

    // An empty wrapped object counts as missing.
    let item = json!({
        "addedAt": { "item": { "data": {} } },
        "item": { "data": { "name": "direct" } }
    });
    assert_eq!(
        playlist_track_data(&item).and_then(|d| d.get("name")),
        Some(&json!("direct"))
    );
}

#[test]
fn test_playlist_track_data_missing() {
    assert!(playlist_track_data(&json!({})).is_none());
    assert!(playlist_track_data(&json!({ "addedAt": { "isoString": "2024-01-01" } })).is_none());
    assert!(playlist_track_data(&json!(null)).is_none());
}

#[test]
fn test_popularity_defaults() {
    assert_eq!(popularity(&json!({ "popularity": 88 })), 88);
    assert_eq!(popularity(&json!({ "popularity": -3 })), 0);
    assert_eq!(popularity(&json!({})), 0);
}

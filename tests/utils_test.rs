use serde_json::json;
use spolink::spotify::ResolveError;
use spolink::types::{ResolveEnvelope, ResolveResult, ResourceKind, SearchEnvelope, TrackRecord};
use spolink::utils::*;

// Helper function to create a test track record
fn create_test_track(id: &str, title: &str, artists: &[&str], duration_ms: u64) -> TrackRecord {
    TrackRecord {
        id: id.to_string(),
        title: title.to_string(),
        artist: artists.first().unwrap_or(&"Unknown").to_string(),
        artists: artists.iter().map(|a| a.to_string()).collect(),
        album: "Test Album".to_string(),
        duration_ms,
        image_url: String::new(),
        popularity: None,
    }
}

#[test]
fn test_format_duration() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(999), "0:00");
    assert_eq!(format_duration(65_000), "1:05");
    assert_eq!(format_duration(215_432), "3:35");
    assert_eq!(format_duration(3_600_000), "60:00");
}

#[test]
fn test_track_rows() {
    let tracks = vec![
        create_test_track("a", "First", &["Artist A", "Guest"], 61_000),
        create_test_track("b", "Second", &[], 0),
    ];

    let rows = track_rows(&tracks);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].position, 1);
    assert_eq!(rows[0].artists, "Artist A, Guest");
    assert_eq!(rows[0].duration, "1:01");
    assert_eq!(rows[1].position, 2);
    assert_eq!(rows[1].artists, "");
}

#[test]
fn test_resolve_result_serialization() {
    let track = create_test_track("ABC123", "Test Song", &["Test Artist"], 1000);
    let result = ResolveResult::Track {
        id: "ABC123".to_string(),
        track,
    };

    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value["type"], "track");
    assert_eq!(value["id"], "ABC123");
    assert_eq!(value["track"]["title"], "Test Song");
    // popularity is omitted when it was never looked up
    assert!(value["track"].get("popularity").is_none());

    let album = serde_json::to_value(ResolveResult::album_stub("AL1".to_string())).unwrap();
    assert_eq!(
        album,
        json!({ "type": "album", "id": "AL1", "tracks": [], "note": "not yet implemented" })
    );
}

#[test]
fn test_playlist_count_matches_tracks() {
    let tracks = vec![
        create_test_track("a", "One", &["X"], 1),
        create_test_track("b", "Two", &["Y"], 2),
    ];
    let result = ResolveResult::playlist("PL".to_string(), tracks);

    assert!(matches!(result, ResolveResult::Playlist { count: 2, .. }));
    assert_eq!(result.tracks().len(), 2);
    assert_eq!(result.kind(), ResourceKind::Playlist);
    assert_eq!(result.id(), "PL");
}

#[test]
fn test_resolve_envelope_success() {
    let track = create_test_track("T1", "Song", &["Artist"], 1000);
    let outcome = Ok(ResolveResult::Track {
        id: "T1".to_string(),
        track,
    });

    let value = serde_json::to_value(ResolveEnvelope::from_outcome(&outcome)).unwrap();

    assert_eq!(value["success"], true);
    assert_eq!(value["type"], "track");
    assert_eq!(value["id"], "T1");
    assert_eq!(value["track_count"], 1);
    assert_eq!(value["tracks"][0]["title"], "Song");
    assert!(value.get("error").is_none());
}

#[test]
fn test_resolve_envelope_failure() {
    let outcome = Err(ResolveError::UnrecognizedUrl("nope".to_string()));

    let value = serde_json::to_value(ResolveEnvelope::from_outcome(&outcome)).unwrap();

    assert_eq!(
        value,
        json!({ "success": false, "error": "could not parse Spotify URL: nope" })
    );
}

#[test]
fn test_search_envelope() {
    let ok = SearchEnvelope::from_outcome(Ok(vec![create_test_track("a", "A", &["X"], 1)]));
    assert!(ok.success);
    assert_eq!(ok.count, Some(1));
    assert_eq!(ok.tracks.map(|t| t.len()), Some(1));

    let failed = SearchEnvelope::from_outcome(Err(ResolveError::NotFound {
        kind: ResourceKind::Track,
        id: "zzz".to_string(),
    }));
    assert!(!failed.success);
    assert_eq!(failed.count, None);
    assert_eq!(failed.error.as_deref(), Some("track zzz not found"));
}

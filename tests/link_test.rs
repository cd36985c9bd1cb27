use spolink::spotify::link::extract_id;
use spolink::types::{ResourceKind, ResourceRef};

fn expect(url: &str, kind: ResourceKind, id: &str) {
    assert_eq!(
        extract_id(url),
        Some(ResourceRef {
            kind,
            id: id.to_string()
        }),
        "url: {}",
        url
    );
}

#[test]
fn test_extract_track_id() {
    expect(
        "https://open.spotify.com/track/7qiZfU4dY1lsylvNFoYL2E",
        ResourceKind::Track,
        "7qiZfU4dY1lsylvNFoYL2E",
    );
}

#[test]
fn test_extract_playlist_id() {
    expect(
        "https://open.spotify.com/playlist/37i9dQZF1FoyQGyinuuvRu",
        ResourceKind::Playlist,
        "37i9dQZF1FoyQGyinuuvRu",
    );
}

#[test]
fn test_extract_album_id() {
    expect(
        "https://open.spotify.com/album/4OHKIK5Y2Fr7ruoSUAB2r3",
        ResourceKind::Album,
        "4OHKIK5Y2Fr7ruoSUAB2r3",
    );
}

#[test]
fn test_extract_ignores_query_string() {
    expect(
        "https://open.spotify.com/track/ABC123?si=f00ba4&utm_source=copy-link",
        ResourceKind::Track,
        "ABC123",
    );
}

#[test]
fn test_extract_takes_maximal_alphanumeric_run() {
    expect(
        "https://open.spotify.com/track/ABC123-remix/extra",
        ResourceKind::Track,
        "ABC123",
    );
    expect(
        "https://open.spotify.com/playlist/XYZ_old",
        ResourceKind::Playlist,
        "XYZ",
    );
}

#[test]
fn test_extract_is_substring_search() {
    // Text around the link is ignored.
    expect(
        "check this out: spotify.com/track/abc999 !!",
        ResourceKind::Track,
        "abc999",
    );
    expect(
        "spotify:album:ignored https://open.spotify.com/album/Q1w2E3",
        ResourceKind::Album,
        "Q1w2E3",
    );
}

#[test]
fn test_extract_prefers_track_over_playlist() {
    let url = "https://open.spotify.com/playlist/PL1 https://open.spotify.com/track/TR1";
    expect(url, ResourceKind::Track, "TR1");
}

#[test]
fn test_extract_no_match() {
    assert_eq!(extract_id("https://example.com/foo"), None);
    assert_eq!(extract_id(""), None);
    assert_eq!(extract_id("https://open.spotify.com/artist/0OdUWJ0sBjDrqHygGUXeCF"), None);
    // The kind segment must follow the host directly.
    assert_eq!(extract_id("https://open.spotify.com/intl-de/track/Q1w2E3"), None);
    // The id must contain at least one alphanumeric character.
    assert_eq!(extract_id("https://open.spotify.com/track/"), None);
    assert_eq!(extract_id("https://open.spotify.com/track/?si=1"), None);
}

#[test]
fn test_resource_kind_round_trip_names() {
    for kind in [
        ResourceKind::Track,
        ResourceKind::Playlist,
        ResourceKind::Album,
    ] {
        assert_eq!(kind.to_string().parse::<ResourceKind>(), Ok(kind));
    }
    assert_eq!(" Playlist ".parse::<ResourceKind>(), Ok(ResourceKind::Playlist));
    assert!("artist".parse::<ResourceKind>().is_err());
}

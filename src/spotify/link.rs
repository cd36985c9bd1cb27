use std::sync::LazyLock;

use regex::Regex;

use crate::types::{ResourceKind, ResourceRef};

// Checked in order; the first pattern that matches anywhere in the URL wins.
static PATTERNS: LazyLock<Vec<(ResourceKind, Regex)>> = LazyLock::new(|| {
    [
        ResourceKind::Track,
        ResourceKind::Playlist,
        ResourceKind::Album,
    ]
    .into_iter()
    .filter_map(|kind| {
        Regex::new(&format!(r"spotify\.com/{}/([a-zA-Z0-9]+)", kind.as_str()))
            .ok()
            .map(|re| (kind, re))
    })
    .collect()
});

/// Extracts the resource kind and identifier from a Spotify link.
///
/// The link is searched, not anchored: anything before `spotify.com/` and
/// anything after the identifier (query strings, trailing paths) is ignored.
/// The identifier is the longest run of ASCII alphanumerics following the
/// kind segment.
///
/// # Example
///
/// ```
/// let r = extract_id("https://open.spotify.com/track/7qiZfU4dY1lsylvNFoYL2E?si=abc").unwrap();
/// assert_eq!(r.kind, ResourceKind::Track);
/// assert_eq!(r.id, "7qiZfU4dY1lsylvNFoYL2E");
/// ```
pub fn extract_id(url: &str) -> Option<ResourceRef> {
    PATTERNS.iter().find_map(|(kind, re)| {
        re.captures(url)
            .and_then(|caps| caps.get(1))
            .map(|id| ResourceRef {
                kind: *kind,
                id: id.as_str().to_string(),
            })
    })
}


use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tabled::Tabled;

pub const UNKNOWN: &str = "Unknown";
pub const ALBUM_NOTE: &str = "not yet implemented";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Track,
    Playlist,
    Album,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceKind::Track => "track",
            ResourceKind::Playlist => "playlist",
            ResourceKind::Album => "album",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "track" => Ok(ResourceKind::Track),
            "playlist" => Ok(ResourceKind::Playlist),
            "album" => Ok(ResourceKind::Album),
            other => Err(format!("unknown resource kind: {}", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub artists: Vec<String>,
    pub album: String,
    pub duration_ms: u64,
    pub image_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub popularity: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ResolveResult {
    Track {
        id: String,
        track: TrackRecord,
    },
    Playlist {
        id: String,
        tracks: Vec<TrackRecord>,
        count: usize,
    },
    Album {
        id: String,
        tracks: Vec<TrackRecord>,
        note: String,
    },
}

impl ResolveResult {
    pub fn album_stub(id: String) -> Self {
        ResolveResult::Album {
            id,
            tracks: Vec::new(),
            note: ALBUM_NOTE.to_string(),
        }
    }

    pub fn playlist(id: String, tracks: Vec<TrackRecord>) -> Self {
        let count = tracks.len();
        ResolveResult::Playlist { id, tracks, count }
    }

    pub fn kind(&self) -> ResourceKind {
        match self {
            ResolveResult::Track { .. } => ResourceKind::Track,
            ResolveResult::Playlist { .. } => ResourceKind::Playlist,
            ResolveResult::Album { .. } => ResourceKind::Album,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ResolveResult::Track { id, .. }
            | ResolveResult::Playlist { id, .. }
            | ResolveResult::Album { id, .. } => id,
        }
    }

    /// Uniform view over the resolved tracks: a single track is returned as a
    /// one-element slice.
    pub fn tracks(&self) -> &[TrackRecord] {
        match self {
            ResolveResult::Track { track, .. } => std::slice::from_ref(track),
            ResolveResult::Playlist { tracks, .. } | ResolveResult::Album { tracks, .. } => tracks,
        }
    }
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub title: String,
    pub artists: String,
    pub album: String,
    pub duration: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResolveEnvelope {
    pub success: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<ResourceKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<TrackRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub track_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchEnvelope {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<TrackRecord>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

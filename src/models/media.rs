//! Media-related data models.

use serde::{Deserialize, Serialize};

/// Media kind detected from a file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Movie,
    TvShow,
    Unknown,
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaKind::Movie => write!(f, "movie"),
            MediaKind::TvShow => write!(f, "tvshow"),
            MediaKind::Unknown => write!(f, "unknown"),
        }
    }
}

impl Default for MediaKind {
    fn default() -> Self {
        MediaKind::Unknown
    }
}

/// Structured fields extracted from a single media name.
///
/// Recomputed per file per run; there is no persistent identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Cleaned title.
    pub title: String,
    /// Release year.
    pub year: Option<u16>,
    /// Resolution token (e.g., "1080p").
    pub resolution: Option<String>,
    /// Season number (TV shows).
    pub season: Option<u16>,
    /// Episode number (TV shows).
    pub episode: Option<u16>,
    /// Episode title (TV shows).
    pub episode_title: Option<String>,
    /// Edition marker (e.g., "Director's Cut").
    pub edition: Option<String>,
}

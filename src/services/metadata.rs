//! Metadata provider collaborator.
//!
//! Optional enrichment: given a show title and an episode number, the
//! provider returns the official episode title, which the engine uses
//! to refine a record before regenerating the file name. The provider
//! being absent or failing never degrades the baseline pipeline.

use crate::models::media::MediaRecord;
use crate::Result;
use serde::Deserialize;

const TVMAZE_BASE_URL: &str = "https://api.tvmaze.com";

/// An episode lookup request derived from a parsed record.
#[derive(Debug, Clone)]
pub struct EpisodeQuery {
    pub title: String,
    pub season: u16,
    pub episode: u16,
}

impl EpisodeQuery {
    /// Build a query from a record, if it carries season and episode.
    pub fn from_record(record: &MediaRecord) -> Option<Self> {
        match (record.season, record.episode) {
            (Some(season), Some(episode)) => Some(Self {
                title: record.title.clone(),
                season,
                episode,
            }),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ShowResponse {
    id: u64,
}

#[derive(Debug, Deserialize)]
struct EpisodeResponse {
    name: String,
}

/// TVmaze-backed metadata client. Keyless public API.
pub struct MetadataClient {
    client: reqwest::Client,
    base_url: String,
}

impl MetadataClient {
    /// Create a client against the public TVmaze API.
    pub fn new() -> Self {
        Self::with_base_url(TVMAZE_BASE_URL)
    }

    /// Create a client against a custom endpoint (used in tests).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up the official episode title for a show/season/episode.
    ///
    /// Returns `Ok(None)` when the show or episode is unknown; network
    /// errors propagate so the caller can decide to continue without
    /// enrichment.
    pub async fn lookup_episode_title(&self, query: &EpisodeQuery) -> Result<Option<String>> {
        let search_url = format!("{}/singlesearch/shows", self.base_url);
        let response = self
            .client
            .get(&search_url)
            .query(&[("q", query.title.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!("No show match for '{}'", query.title);
            return Ok(None);
        }

        let show: ShowResponse = response.json().await?;

        let episode_url = format!("{}/shows/{}/episodebynumber", self.base_url, show.id);
        let response = self
            .client
            .get(&episode_url)
            .query(&[
                ("season", query.season.to_string()),
                ("number", query.episode.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            tracing::debug!(
                "No episode match for '{}' S{:02}E{:02}",
                query.title,
                query.season,
                query.episode
            );
            return Ok(None);
        }

        let episode: EpisodeResponse = response.json().await?;
        let name = episode.name.trim().to_string();
        if name.is_empty() {
            Ok(None)
        } else {
            Ok(Some(name))
        }
    }
}

impl Default for MetadataClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_requires_season_and_episode() {
        let record = MediaRecord {
            title: "The Show".to_string(),
            season: Some(2),
            episode: Some(5),
            ..Default::default()
        };
        let query = EpisodeQuery::from_record(&record).unwrap();
        assert_eq!(query.season, 2);
        assert_eq!(query.episode, 5);

        let record = MediaRecord {
            title: "Movie Name".to_string(),
            year: Some(2014),
            ..Default::default()
        };
        assert!(EpisodeQuery::from_record(&record).is_none());
    }
}

use async_trait::async_trait;
use rspotify::{
    http::HttpError,
    model::{FullTrack, SearchResult, SearchType},
    prelude::*,
    ClientCredsSpotify, ClientError,
};
use std::sync::Arc;

use crate::error::SearchError;

const EMBED_BASE: &str = "https://open.spotify.com/embed/track";

/// A track as returned by the catalog, reduced to what the chat shows.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TrackRecord {
    pub id: Option<String>,
    pub name: String,
    pub artists: Vec<String>,
    pub external_url: Option<String>,
}

impl TrackRecord {
    pub fn artist_line(&self) -> String {
        self.artists.join(", ")
    }

    /// Embeddable player for the track, if the catalog gave it an id.
    pub fn embed_url(&self) -> Option<String> {
        self.id.as_ref().map(|id| format!("{EMBED_BASE}/{id}"))
    }
}

impl From<FullTrack> for TrackRecord {
    fn from(track: FullTrack) -> Self {
        TrackRecord {
            id: track.id.as_ref().map(|id| id.id().to_string()),
            external_url: track.external_urls.get("spotify").cloned(),
            artists: track.artists.into_iter().map(|a| a.name).collect(),
            name: track.name,
        }
    }
}

#[async_trait]
pub trait CatalogSearch: Send + Sync {
    /// Up to `limit` tracks for `query`, in the catalog's ranking order.
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<TrackRecord>, SearchError>;
}

pub struct SpotifySearch {
    spotify: Arc<ClientCredsSpotify>,
}

impl SpotifySearch {
    pub fn new(spotify: Arc<ClientCredsSpotify>) -> Self {
        SpotifySearch { spotify }
    }
}

fn classify(err: ClientError) -> SearchError {
    if let ClientError::Http(ref http) = err {
        if let HttpError::Client(ref inner) = **http {
            if inner.is_timeout() {
                return SearchError::TimedOut;
            }
        }
    }
    SearchError::Failed(err.into())
}

#[async_trait]
impl CatalogSearch for SpotifySearch {
    async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<TrackRecord>, SearchError> {
        let result = self
            .spotify
            .search(query, SearchType::Track, None, None, Some(limit), None)
            .await
            .map_err(classify)?;

        let tracks = match result {
            SearchResult::Tracks(page) => page.items.into_iter().map(TrackRecord::from).collect(),
            _ => vec![],
        };
        Ok(tracks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_url_uses_track_id() {
        let track = TrackRecord {
            id: Some("4uLU6hMCjMI75M1A2tKUQC".to_string()),
            name: "Never Gonna Give You Up".to_string(),
            artists: vec!["Rick Astley".to_string()],
            external_url: None,
        };
        assert_eq!(
            track.embed_url().as_deref(),
            Some("https://open.spotify.com/embed/track/4uLU6hMCjMI75M1A2tKUQC")
        );
    }

    #[test]
    fn no_id_no_embed() {
        assert_eq!(TrackRecord::default().embed_url(), None);
    }

    const TRACK_JSON: &str = r#"{
        "album": {
            "album_type": "single",
            "artists": [{"external_urls": {}, "href": null, "id": null, "name": "Shakira"}],
            "available_markets": [],
            "external_urls": {},
            "href": null,
            "id": null,
            "images": [],
            "name": "Bzrp Music Sessions, Vol. 53",
            "release_date": "2023-01-11",
            "release_date_precision": "day"
        },
        "artists": [
            {"external_urls": {}, "href": null, "id": null, "name": "Bizarrap"},
            {"external_urls": {}, "href": null, "id": null, "name": "Shakira"}
        ],
        "available_markets": ["ES"],
        "disc_number": 1,
        "duration_ms": 218423,
        "explicit": false,
        "external_ids": {},
        "external_urls": {"spotify": "https://open.spotify.com/track/4nrPB8O7Y7wsOCJdgXkthe"},
        "href": null,
        "id": "4nrPB8O7Y7wsOCJdgXkthe",
        "is_local": false,
        "name": "Shakira: Bzrp Music Sessions, Vol. 53",
        "popularity": 90,
        "preview_url": null,
        "track_number": 1
    }"#;

    #[test]
    fn full_track_maps_to_record() {
        let full: FullTrack = serde_json::from_str(TRACK_JSON).unwrap();
        let track = TrackRecord::from(full);
        assert_eq!(track.id.as_deref(), Some("4nrPB8O7Y7wsOCJdgXkthe"));
        assert_eq!(track.name, "Shakira: Bzrp Music Sessions, Vol. 53");
        assert_eq!(track.artists, vec!["Bizarrap", "Shakira"]);
        assert_eq!(
            track.external_url.as_deref(),
            Some("https://open.spotify.com/track/4nrPB8O7Y7wsOCJdgXkthe")
        );
        assert_eq!(
            track.embed_url().as_deref(),
            Some("https://open.spotify.com/embed/track/4nrPB8O7Y7wsOCJdgXkthe")
        );
    }

    #[test]
    fn non_timeout_client_error_is_a_failure() {
        let parse_err = serde_json::from_str::<FullTrack>("{}").unwrap_err();
        let err = classify(ClientError::from(parse_err));
        assert!(matches!(err, SearchError::Failed(_)));
    }

    #[test]
    fn artists_are_comma_joined() {
        let track = TrackRecord {
            artists: vec!["Shakira".to_string(), "Bizarrap".to_string()],
            ..Default::default()
        };
        assert_eq!(track.artist_line(), "Shakira, Bizarrap");
    }
}

//! Main dance server client.

use crate::error::{Result, ServerClientError};
use crate::types::ClientConfig;
use dancefloor_core::{
    DanceSong, DanceSongsRequest, PlaylistDescriptor, Song, SongFeatureRecord, TrackItem,
};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Client for the five dance server endpoints.
///
/// One method per pipeline stage. Every method is a single attempt: the
/// caller decides what a failure means for the run as a whole.
pub struct DancefloorClient {
    http: Client,
    base_url: String,
}

impl DancefloorClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let url = config.url.trim_end_matches('/').to_string();
        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Dancefloor/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self {
            http,
            base_url: url,
        })
    }

    /// Get the server URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the user's playlists.
    pub async fn get_user_playlists(&self) -> Result<Vec<PlaylistDescriptor>> {
        let url = format!("{}/user-playlists", self.base_url);
        debug!(url = %url, "Fetching user playlists");

        let response = self.http.get(&url).send().await.map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            let playlists: Vec<PlaylistDescriptor> = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse playlists response: {e}"))
            })?;

            debug!(playlists = playlists.len(), "Fetched user playlists");
            Ok(playlists)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Expand one playlist group into its track items.
    pub async fn get_playlist_items(
        &self,
        group: &[PlaylistDescriptor],
    ) -> Result<Vec<TrackItem>> {
        let url = format!("{}/playlist-items", self.base_url);
        debug!(url = %url, playlists = group.len(), "Fetching playlist items");

        let response = self
            .http
            .post(&url)
            .json(&group)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            let items: Vec<TrackItem> = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!(
                    "Failed to parse playlist items response: {e}"
                ))
            })?;

            debug!(items = items.len(), "Fetched playlist items");
            Ok(items)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Build the deduplicated song list from flattened track items.
    pub async fn get_song_list(&self, items: &[TrackItem]) -> Result<Vec<Song>> {
        let url = format!("{}/song-list", self.base_url);
        debug!(url = %url, items = items.len(), "Fetching song list");

        let response = self
            .http
            .post(&url)
            .json(&items)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            let songs: Vec<Song> = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse song list response: {e}"))
            })?;

            debug!(songs = songs.len(), "Fetched song list");
            Ok(songs)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Fetch audio-feature records for the given songs.
    pub async fn get_song_data(&self, songs: &[Song]) -> Result<Vec<SongFeatureRecord>> {
        let url = format!("{}/song-data", self.base_url);
        debug!(url = %url, songs = songs.len(), "Fetching song data");

        let response = self
            .http
            .post(&url)
            .json(&songs)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            let song_data: Vec<SongFeatureRecord> = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse song data response: {e}"))
            })?;

            debug!(records = song_data.len(), "Fetched song data");
            Ok(song_data)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Join songs with their features and filter for danceable ones.
    pub async fn get_dance_songs(
        &self,
        songs: &[Song],
        song_data: &[SongFeatureRecord],
    ) -> Result<Vec<DanceSong>> {
        let url = format!("{}/dance-songs", self.base_url);
        debug!(
            url = %url,
            songs = songs.len(),
            records = song_data.len(),
            "Fetching dance songs"
        );

        let request = DanceSongsRequest {
            songs: songs.to_vec(),
            song_data: song_data.to_vec(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();

        if status.is_success() {
            let dance_songs: Vec<DanceSong> = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse dance songs response: {e}"))
            })?;

            debug!(dance_songs = dance_songs.len(), "Fetched dance songs");
            Ok(dance_songs)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

fn map_send_error(e: reqwest::Error) -> ServerClientError {
    if e.is_connect() || e.is_timeout() {
        ServerClientError::ServerUnreachable(e.to_string())
    } else {
        ServerClientError::Request(e)
    }
}

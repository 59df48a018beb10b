//! Types for the dance server API requests and responses.

use serde::{Deserialize, Serialize};

/// A playlist as listed by the server, before track expansion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistDescriptor {
    /// Unique playlist identifier
    pub id: String,

    /// Playlist display name
    pub name: String,

    /// Number of tracks the playlist reports
    pub track_total: u32,
}

/// One track of one playlist, as returned by the playlist-items endpoint.
///
/// Carries its originating playlist so provenance survives flattening.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackItem {
    pub track_id: String,
    pub track_name: String,
    pub track_album: String,
    pub track_artist: String,
    pub playlist_id: String,
    pub playlist_name: String,
}

/// A deduplicated song produced from the flattened track items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Song {
    pub track_id: String,
    pub track_name: String,
    pub track_album: String,
    pub track_artist: String,
    pub playlist_name: String,
}

/// Audio-feature attributes for one track.
///
/// The feature service returns many more attributes; only danceability is
/// consumed downstream, the rest are tolerated as optionals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SongFeatureRecord {
    /// Track id the features are keyed to
    pub id: String,

    /// Danceability score (0.0-1.0)
    pub danceability: f64,

    /// Energy score (0.0-1.0)
    pub energy: Option<f64>,

    /// Tempo in BPM
    pub tempo: Option<f64>,
}

/// Final filtered record: a song judged danceable, joined with its score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DanceSong {
    pub track_name: String,
    pub track_album: String,
    pub track_artist: String,
    pub playlist_name: String,
    pub danceability: f64,
}

/// Request body for the dance-songs endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DanceSongsRequest {
    pub songs: Vec<Song>,
    pub song_data: Vec<SongFeatureRecord>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_descriptor_round_trips_wire_fields() {
        let json = r#"{"id":"pl1","name":"Road Trip","track_total":42}"#;
        let playlist: PlaylistDescriptor = serde_json::from_str(json).unwrap();
        assert_eq!(playlist.id, "pl1");
        assert_eq!(playlist.name, "Road Trip");
        assert_eq!(playlist.track_total, 42);
    }

    #[test]
    fn feature_record_tolerates_missing_optionals() {
        let json = r#"{"id":"t1","danceability":0.91,"energy":null,"tempo":null}"#;
        let features: SongFeatureRecord = serde_json::from_str(json).unwrap();
        assert_eq!(features.id, "t1");
        assert!(features.energy.is_none());
        assert!(features.tempo.is_none());
    }

    #[test]
    fn dance_songs_request_uses_song_data_key() {
        let request = DanceSongsRequest {
            songs: vec![],
            song_data: vec![],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("songs").is_some());
        assert!(json.get("song_data").is_some());
    }
}

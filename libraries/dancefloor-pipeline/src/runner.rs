use crate::error::{PipelineError, Result};
use crate::types::{PipelineConfig, PipelineOutcome, PipelineStage, PipelineSummary};
use dancefloor_core::{group_by_track_total, TrackItem};
use dancefloor_server_client::DancefloorClient;
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Runs the five fetch stages against one dance server.
///
/// Owns the client; each `run` is an independent session with its own id
/// and summary. Errors carry the stage they occurred in, so callers can
/// report exactly where a run stopped.
pub struct DancePipeline {
    client: DancefloorClient,
    config: PipelineConfig,
}

impl DancePipeline {
    pub fn new(client: DancefloorClient, config: PipelineConfig) -> Self {
        Self { client, config }
    }

    /// Execute the pipeline end-to-end.
    ///
    /// An empty playlist listing is not an error: the run finishes early
    /// with an empty outcome and no later endpoint is called.
    pub async fn run(&self) -> Result<PipelineOutcome> {
        let start = Instant::now();
        let session_id = Uuid::new_v4().to_string();

        info!(
            session_id = %session_id,
            group_capacity = self.config.group_capacity,
            "Starting dance song pipeline"
        );

        // Stage 1: playlist listing
        let playlists = self
            .client
            .get_user_playlists()
            .await
            .map_err(PipelineError::at(PipelineStage::Playlists))?;

        if playlists.is_empty() {
            info!(session_id = %session_id, "No playlists available, finishing early");
            return Ok(PipelineOutcome {
                dance_songs: Vec::new(),
                summary: PipelineSummary {
                    session_id,
                    playlists: 0,
                    groups: 0,
                    track_items: 0,
                    songs: 0,
                    dance_songs: 0,
                    duration_seconds: start.elapsed().as_secs(),
                },
            });
        }

        let playlist_count = playlists.len();
        let groups = group_by_track_total(playlists, self.config.group_capacity);
        let group_count = groups.len();
        debug!(
            playlists = playlist_count,
            groups = group_count,
            "Grouped playlists by track total"
        );

        // Stage 2: expand each group, one request at a time. Serialized on
        // purpose: it caps the load on the expansion endpoint and keeps the
        // flattened order equal to group order then within-group order.
        let mut track_items: Vec<TrackItem> = Vec::new();
        for (index, group) in groups.iter().enumerate() {
            debug!(group = index, playlists = group.len(), "Expanding playlist group");
            let items = self
                .client
                .get_playlist_items(group)
                .await
                .map_err(PipelineError::at(PipelineStage::PlaylistItems))?;
            track_items.extend(items);
        }
        debug!(track_items = track_items.len(), "Flattened playlist items");

        // Stage 3: deduplicated song list
        let songs = self
            .client
            .get_song_list(&track_items)
            .await
            .map_err(PipelineError::at(PipelineStage::SongList))?;

        // Stage 4: audio features
        let song_data = self
            .client
            .get_song_data(&songs)
            .await
            .map_err(PipelineError::at(PipelineStage::SongData))?;

        // Stage 5: danceable filter over songs joined with their features
        let dance_songs = self
            .client
            .get_dance_songs(&songs, &song_data)
            .await
            .map_err(PipelineError::at(PipelineStage::DanceSongs))?;

        let summary = PipelineSummary {
            session_id,
            playlists: playlist_count,
            groups: group_count,
            track_items: track_items.len(),
            songs: songs.len(),
            dance_songs: dance_songs.len(),
            duration_seconds: start.elapsed().as_secs(),
        };

        info!(
            session_id = %summary.session_id,
            playlists = summary.playlists,
            groups = summary.groups,
            track_items = summary.track_items,
            songs = summary.songs,
            dance_songs = summary.dance_songs,
            duration_seconds = summary.duration_seconds,
            "Dance song pipeline complete"
        );

        Ok(PipelineOutcome {
            dance_songs,
            summary,
        })
    }
}

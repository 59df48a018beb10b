use dancefloor_core::DanceSong;
use serde::{Deserialize, Serialize};

/// Default combined track total per playlist-items request.
///
/// A per-request budget for the expansion endpoint; override via
/// [`PipelineConfig`] if the server tolerates larger batches.
pub const DEFAULT_GROUP_CAPACITY: u32 = 500;

/// The five stages of the pipeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    Playlists,
    PlaylistItems,
    SongList,
    SongData,
    DanceSongs,
}

/// Tuning knobs for a pipeline run.
#[derive(Debug, Clone, Copy)]
pub struct PipelineConfig {
    /// Maximum combined `track_total` per playlist-items request
    pub group_capacity: u32,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            group_capacity: DEFAULT_GROUP_CAPACITY,
        }
    }
}

/// Summary of a completed pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineSummary {
    pub session_id: String,
    pub playlists: usize,
    pub groups: usize,
    pub track_items: usize,
    pub songs: usize,
    pub dance_songs: usize,
    pub duration_seconds: u64,
}

/// Final result of a pipeline run: the dance songs plus run statistics.
///
/// An empty `dance_songs` with `playlists == 0` in the summary means the
/// user had no playlists; the later endpoints were never called.
#[derive(Debug, Clone)]
pub struct PipelineOutcome {
    pub dance_songs: Vec<DanceSong>,
    pub summary: PipelineSummary,
}

//! Dancefloor core domain types and pure playlist logic.
//!
//! This crate has no IO: it defines the wire shapes exchanged with the
//! dance server and the capacity-based playlist grouping used to batch
//! the playlist-items requests.

pub mod grouper;
pub mod types;

pub use grouper::group_by_track_total;
pub use types::{
    DanceSong, DanceSongsRequest, PlaylistDescriptor, Song, SongFeatureRecord, TrackItem,
};

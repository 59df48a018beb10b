//! Capacity-based playlist grouping.
//!
//! The playlist-items endpoint expands every track of every playlist it is
//! sent, so requests are batched by combined `track_total`. Grouping is a
//! single greedy pass: playlists stay in input order and a group is closed
//! as soon as the next playlist would push its running total over capacity.

use crate::types::PlaylistDescriptor;

/// Partition playlists into groups whose combined `track_total` stays at or
/// under `capacity`.
///
/// Order-preserving: concatenating the returned groups yields the input
/// sequence. A single playlist larger than `capacity` still forms its own
/// group (capacity is a packing target, not a per-item limit), so a
/// capacity of 0 degenerates to one group per playlist.
pub fn group_by_track_total(
    playlists: Vec<PlaylistDescriptor>,
    capacity: u32,
) -> Vec<Vec<PlaylistDescriptor>> {
    let mut groups = Vec::new();
    let mut current: Vec<PlaylistDescriptor> = Vec::new();
    let mut running_total: u64 = 0;

    for playlist in playlists {
        if running_total + u64::from(playlist.track_total) > u64::from(capacity)
            && !current.is_empty()
        {
            groups.push(std::mem::take(&mut current));
            running_total = 0;
        }

        running_total += u64::from(playlist.track_total);
        current.push(playlist);
    }

    if !current.is_empty() {
        groups.push(current);
    }

    groups
}

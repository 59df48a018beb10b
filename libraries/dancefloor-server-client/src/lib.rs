//! Dance Server Client
//!
//! HTTP client library for the dance server endpoints: playlist listing,
//! playlist-item expansion, song-list construction, audio-feature lookup,
//! and the final danceable-song filter.
//!
//! Each operation issues a single request and returns the decoded payload;
//! there are no retries. Transport failures, non-success statuses, and
//! malformed bodies surface as distinct [`ServerClientError`] variants.
//!
//! # Example
//!
//! ```ignore
//! use dancefloor_server_client::{ClientConfig, DancefloorClient};
//!
//! let client = DancefloorClient::new(ClientConfig::new("https://dance.example.com"))?;
//! let playlists = client.get_user_playlists().await?;
//! println!("Found {} playlists", playlists.len());
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::DancefloorClient;
pub use error::{Result, ServerClientError};
pub use types::ClientConfig;

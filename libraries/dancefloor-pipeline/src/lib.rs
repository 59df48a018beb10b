//! The fixed five-stage dance song pipeline.
//!
//! Fetch the user's playlists, batch them by combined track total, expand
//! each batch into track items, build the song list, look up audio
//! features, and filter for danceable songs. Stages run strictly in
//! sequence; the first stage failure short-circuits the run and is
//! surfaced to the caller tagged with the stage that failed.

mod error;
mod runner;
mod types;

// Public exports
pub use error::{PipelineError, Result};
pub use runner::DancePipeline;
pub use types::{
    PipelineConfig, PipelineOutcome, PipelineStage, PipelineSummary, DEFAULT_GROUP_CAPACITY,
};

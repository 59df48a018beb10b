use crate::types::PipelineStage;
use dancefloor_server_client::ServerClientError;
use thiserror::Error;

/// Errors that can occur during a pipeline run.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// A stage's fetch failed; the run stopped at that stage.
    #[error("{stage:?} stage failed: {source}")]
    Stage {
        stage: PipelineStage,
        source: ServerClientError,
    },
}

impl PipelineError {
    pub(crate) fn at(stage: PipelineStage) -> impl FnOnce(ServerClientError) -> Self {
        move |source| Self::Stage { stage, source }
    }

    /// The stage the run stopped at.
    pub fn stage(&self) -> PipelineStage {
        match self {
            Self::Stage { stage, .. } => *stage,
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;

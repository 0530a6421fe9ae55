use gs_core::GsError;
use gs_stats::StatsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Core(#[from] GsError),

    #[error(transparent)]
    Stats(#[from] StatsError),

    /// A dispatch reached a server whose queue was already closed.
    #[error("queue of {server} is closed")]
    QueueClosed { server: String },

    #[error("simulation has already run")]
    AlreadyRun,
}

pub type SimResult<T> = Result<T, SimError>;

//! Error types for the recalculation engine.

use store::{MovieId, StoreError};
use thiserror::Error;

/// Errors raised while applying a rating and recomputing derived values
#[derive(Error, Debug)]
pub enum EngineError {
    /// Lookup, mutation, or commit failure in the persistence layer
    #[error(transparent)]
    Store(#[from] StoreError),

    /// The movie's average is still undefined, so there is nothing to report.
    ///
    /// Raised only by summary extraction, after the commit has already
    /// succeeded; the recalculated data stays persisted.
    #[error("Movie {movie_id} has no average rating yet")]
    AverageUnavailable { movie_id: MovieId },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, EngineError>;

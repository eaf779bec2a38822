//! Error types for the store crate.

use thiserror::Error;

use crate::types::{CriticId, MovieId};

/// Errors that can occur while loading, querying, or committing the dataset
///
/// Not-found variants carry the offending id so callers can report which
/// reference was dangling.
#[derive(Error, Debug)]
pub enum StoreError {
    /// A movie id was referenced that doesn't exist in the dataset
    #[error("Movie {id} not found")]
    MovieNotFound { id: MovieId },

    /// A critic id was referenced that doesn't exist in the dataset
    #[error("Critic {id} not found")]
    CriticNotFound { id: CriticId },

    /// No rating exists for the (movie, critic) pair
    #[error("No rating for movie {movie_id} by critic {critic_id}")]
    RatingNotFound {
        movie_id: MovieId,
        critic_id: CriticId,
    },

    /// A rating for the (movie, critic) pair already exists
    #[error("Rating for movie {movie_id} by critic {critic_id} already exists")]
    DuplicateRating {
        movie_id: MovieId,
        critic_id: CriticId,
    },

    /// I/O error while reading or committing the dataset file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Dataset file couldn't be serialized or deserialized
    #[error("Dataset format error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Dataset contents failed validation (dangling references, duplicate pairs)
    #[error("Invalid dataset: {reason}")]
    InvalidDataset { reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, StoreError>;

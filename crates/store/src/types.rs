//! Core domain types for the movie review dataset.
//!
//! This module defines the three entities the recalculation engine works
//! over. Movies and critics are seeded by an external process; only ratings
//! are ever created by a run, and only derived fields (`average_rating`,
//! `rating_weight`) are ever rewritten.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================
// These make the domain clearer and prevent mixing up movie IDs with critic IDs

/// Unique identifier for a movie
pub type MovieId = u32;

/// Unique identifier for a critic
pub type CriticId = u32;

/// A star score, valid in 1..=5 (enforced at the CLI boundary)
pub type Stars = u8;

/// Weight assigned to a critic before any recalculation pass has run
pub const DEFAULT_RATING_WEIGHT: f64 = 1.0;

// =============================================================================
// Entities
// =============================================================================

/// A movie and its derived weighted average rating.
///
/// `average_rating` is `None` until the movie has received at least one
/// rating from a critic with a known weight. It is never NaN or infinite;
/// the zero-rating case is handled as an explicit branch upstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub average_rating: Option<f64>,
}

/// A critic and their derived credibility weight.
///
/// After a recalculation pass, `rating_weight` is always one of
/// {1.0, 0.33, 0.15}. Seed data is expected to start new critics at
/// [`DEFAULT_RATING_WEIGHT`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Critic {
    pub id: CriticId,
    pub rating_weight: f64,
}

/// One critic's star score for one movie.
///
/// Composite-unique on (movie_id, critic_id): created on the first rating
/// by a pair, overwritten in place on later ratings, never duplicated and
/// never deleted.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Rating {
    pub movie_id: MovieId,
    pub critic_id: CriticId,
    pub stars: Stars,
}

impl Movie {
    /// Create a movie with no average yet
    pub fn new(id: MovieId) -> Self {
        Self {
            id,
            average_rating: None,
        }
    }
}

impl Critic {
    /// Create a critic at the default weight
    pub fn new(id: CriticId) -> Self {
        Self {
            id,
            rating_weight: DEFAULT_RATING_WEIGHT,
        }
    }
}

//! The pass sequence for one invocation.
//!
//! This module coordinates the whole run:
//! 1. Upsert the incoming rating
//! 2. Recalculate every qualifying critic's weight (against pre-update averages)
//! 3. Recalculate every movie's weighted average (with the new weights)
//! 4. Commit all mutations atomically
//! 5. Extract the summary for the affected critic and movie
//!
//! The order is load-bearing: each pass reads only values the earlier
//! passes have finalized, and nothing reads its own output. One update
//! step per run; this is not a fixed-point solver.

use store::{CriticId, MovieId, RatingStore, Stars, StoreError};
use tracing::debug;

use crate::averages::recalculate_movie_averages;
use crate::error::{EngineError, Result};
use crate::upsert::upsert_rating;
use crate::weights::recalculate_critic_weights;

/// What a successful run reports: the affected critic's new weight and the
/// affected movie's new average.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateSummary {
    pub critic_weight: f64,
    pub movie_average: f64,
}

/// Apply one rating and recompute all derived values.
///
/// Commit happens before summary extraction: a summary failure (the movie's
/// average can still be absent) is reportable, but the recalculated data is
/// already durable by then.
///
/// # Errors
/// Not-found errors from the upsert or a failed commit abort before
/// anything is persisted; [`EngineError::AverageUnavailable`] afterwards
/// means the commit succeeded but there is no average to print.
pub fn apply_rating(
    store: &mut impl RatingStore,
    movie_id: MovieId,
    critic_id: CriticId,
    stars: Stars,
) -> Result<UpdateSummary> {
    upsert_rating(store, movie_id, critic_id, stars)?;
    debug!(movie_id, critic_id, stars, "rating upserted");

    // The incoming rating is excluded from the weight pass; it only starts
    // counting against its critic on the next run.
    recalculate_critic_weights(store, Some((movie_id, critic_id)))?;
    debug!("critic weight pass complete");

    recalculate_movie_averages(store)?;
    debug!("movie average pass complete");

    store.commit()?;

    summarize(store, movie_id, critic_id)
}

/// Look up the post-run weight and average for the affected pair.
pub fn summarize(
    store: &impl RatingStore,
    movie_id: MovieId,
    critic_id: CriticId,
) -> Result<UpdateSummary> {
    let critic = store
        .find_critic(critic_id)
        .ok_or(StoreError::CriticNotFound { id: critic_id })?;
    let movie = store
        .find_movie(movie_id)
        .ok_or(StoreError::MovieNotFound { id: movie_id })?;
    let movie_average = movie
        .average_rating
        .ok_or(EngineError::AverageUnavailable { movie_id })?;

    Ok(UpdateSummary {
        critic_weight: critic.rating_weight,
        movie_average,
    })
}

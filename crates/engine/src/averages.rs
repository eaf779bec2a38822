//! Movie average recalculation.
//!
//! Recomputes every movie's weighted average from its ratings and the
//! critic weights as just rewritten by the weight pass. Movies are
//! independent of each other, so iteration order doesn't matter.

use store::{MovieId, RatingStore, StoreError};
use tracing::debug;

use crate::error::Result;

/// Recompute and overwrite `average_rating` for every movie.
///
/// ## Algorithm
/// Over the movie's ratings:
/// - `weight_total = Σ critic.rating_weight`
/// - `rating_total = Σ stars × critic.rating_weight`
/// - `average = rating_total / weight_total`
///
/// A movie with zero ratings (or zero total weight) gets `None`: the
/// average is absent, never 0.0 and never a NaN from dividing by zero.
pub fn recalculate_movie_averages(store: &mut impl RatingStore) -> Result<()> {
    for movie_id in store.all_movie_ids() {
        let average = average_for_movie(store, movie_id)?;
        debug!(movie_id, ?average, "recalculated movie average");
        store.set_movie_average(movie_id, average)?;
    }
    Ok(())
}

fn average_for_movie(store: &impl RatingStore, movie_id: MovieId) -> Result<Option<f64>> {
    let ratings = store.ratings_for_movie(movie_id);
    if ratings.is_empty() {
        return Ok(None);
    }

    let mut weight_total = 0.0;
    let mut rating_total = 0.0;
    for rating in &ratings {
        let critic = store
            .find_critic(rating.critic_id)
            .ok_or(StoreError::CriticNotFound {
                id: rating.critic_id,
            })?;
        weight_total += critic.rating_weight;
        rating_total += f64::from(rating.stars) * critic.rating_weight;
    }

    // Policy weights are all positive, but seed data isn't trusted that far
    if weight_total > 0.0 {
        Ok(Some(rating_total / weight_total))
    } else {
        Ok(None)
    }
}

//! Critic weight recalculation.
//!
//! A critic's credibility weight is derived from how far their past ratings
//! sit from the movies' current averages. This pass runs before any new
//! averages are written, so every disparity is measured against the
//! pre-update snapshot.

use store::{CriticId, MovieId, RatingStore};
use tracing::debug;

use crate::error::Result;

/// Weight for critics whose ratings track consensus (or who have no
/// comparable data yet)
pub const LOW_DISPARITY_WEIGHT: f64 = 1.0;

/// Weight for critics averaging more than one star away from consensus
pub const MODERATE_DISPARITY_WEIGHT: f64 = 0.33;

/// Weight for critics averaging more than two stars away from consensus
pub const HIGH_DISPARITY_WEIGHT: f64 = 0.15;

/// Map a critic's mean disparity to one of the three policy weights.
///
/// Thresholds are exclusive on the greater-than side: a disparity of
/// exactly 1.0 or 2.0 stays in the lower tier. First match wins.
pub fn weight_for_disparity(disparity: f64) -> f64 {
    if disparity > 2.0 {
        HIGH_DISPARITY_WEIGHT
    } else if disparity > 1.0 {
        MODERATE_DISPARITY_WEIGHT
    } else {
        LOW_DISPARITY_WEIGHT
    }
}

/// Recompute and overwrite the weight of every critic that has at least
/// one rating. Critics with zero ratings are left untouched.
///
/// `pending` is the (movie, critic) pair upserted by the current run, if
/// any. That rating is skipped: weights judge a critic's past ratings, and
/// the incoming one only starts counting against them on the next run.
///
/// ## Algorithm
/// For each qualifying critic:
/// 1. Keep only their ratings (minus `pending`) whose movie has a defined
///    average; ratings toward unrated movies carry no information yet.
/// 2. No comparable ratings at all → the low-disparity weight. This is an
///    explicit branch, not a 0/0 division.
/// 3. Otherwise mean of |stars − average| over the kept set, mapped through
///    [`weight_for_disparity`].
///
/// The pass only reads movie averages and only writes critic weights, so it
/// observes a consistent pre-update snapshot of every average.
pub fn recalculate_critic_weights(
    store: &mut impl RatingStore,
    pending: Option<(MovieId, CriticId)>,
) -> Result<()> {
    for critic_id in store.critics_with_ratings() {
        let weight = weight_for_critic(store, critic_id, pending);
        debug!(critic_id, weight, "recalculated critic weight");
        store.set_critic_weight(critic_id, weight)?;
    }
    Ok(())
}

fn weight_for_critic(
    store: &impl RatingStore,
    critic_id: CriticId,
    pending: Option<(MovieId, CriticId)>,
) -> f64 {
    let disparities: Vec<f64> = store
        .ratings_for_critic(critic_id)
        .iter()
        .filter(|rating| Some((rating.movie_id, rating.critic_id)) != pending)
        .filter_map(|rating| {
            store
                .find_movie(rating.movie_id)
                .and_then(|movie| movie.average_rating)
                .map(|average| (f64::from(rating.stars) - average).abs())
        })
        .collect();

    if disparities.is_empty() {
        // Every rated movie lacks an average; nothing to compare against
        return LOW_DISPARITY_WEIGHT;
    }

    let relative_disparity = disparities.iter().sum::<f64>() / disparities.len() as f64;
    weight_for_disparity(relative_disparity)
}

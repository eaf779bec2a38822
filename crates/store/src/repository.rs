//! The persistence trait the recalculation engine is written against.
//!
//! The engine never touches a concrete store type: it takes any
//! `RatingStore`, which lets tests run the full pass sequence against the
//! in-memory [`Catalog`](crate::Catalog) while the binary uses the
//! file-backed [`JsonStore`](crate::JsonStore).

use crate::error::Result;
use crate::types::{Critic, CriticId, Movie, MovieId, Rating, Stars};

/// Read and write access to one in-memory view of the dataset, plus an
/// all-or-nothing commit of every mutation made through it.
///
/// ## Design Note
/// Mutations are confined to the three things a run may change: the one
/// upserted rating, critic weights, and movie averages. There is no way to
/// create movies or critics through this trait.
pub trait RatingStore {
    /// Look up a movie by id
    fn find_movie(&self, id: MovieId) -> Option<&Movie>;

    /// Look up a critic by id
    fn find_critic(&self, id: CriticId) -> Option<&Critic>;

    /// Look up the unique rating for a (movie, critic) pair
    fn find_rating(&self, movie_id: MovieId, critic_id: CriticId) -> Option<&Rating>;

    /// Ids of every movie in the dataset, rated or not
    fn all_movie_ids(&self) -> Vec<MovieId>;

    /// Ids of every critic that has at least one rating
    fn critics_with_ratings(&self) -> Vec<CriticId>;

    /// All ratings received by a movie (empty if none)
    fn ratings_for_movie(&self, id: MovieId) -> Vec<Rating>;

    /// All ratings made by a critic (empty if none)
    fn ratings_for_critic(&self, id: CriticId) -> Vec<Rating>;

    /// Create the unique rating for a pair that has none yet.
    ///
    /// # Errors
    /// `MovieNotFound` / `CriticNotFound` if either reference is dangling
    /// (the store never creates movies or critics on the caller's behalf);
    /// `DuplicateRating` if the pair already has one.
    fn create_rating(&mut self, movie_id: MovieId, critic_id: CriticId, stars: Stars)
    -> Result<()>;

    /// Overwrite the stars of an existing rating.
    ///
    /// # Errors
    /// `RatingNotFound` if the pair has no rating to overwrite.
    fn set_rating_stars(&mut self, movie_id: MovieId, critic_id: CriticId, stars: Stars)
    -> Result<()>;

    /// Overwrite a critic's derived weight
    fn set_critic_weight(&mut self, id: CriticId, weight: f64) -> Result<()>;

    /// Overwrite a movie's derived average (`None` = no defined average)
    fn set_movie_average(&mut self, id: MovieId, average: Option<f64>) -> Result<()>;

    /// Persist every mutation made since load, atomically.
    ///
    /// Either the whole mutated dataset becomes durable or none of it does;
    /// a failed commit must leave the previously persisted state intact.
    fn commit(&mut self) -> Result<()>;
}

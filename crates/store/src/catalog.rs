//! The in-memory dataset and its indices.
//!
//! `Catalog` is the heart of the store crate: it holds all movies, critics,
//! and ratings for one run and provides O(1) lookups through HashMap
//! indices. It implements [`RatingStore`] with a no-op commit, which is
//! exactly what tests want; the file-backed store wraps it and adds a real
//! commit.

use std::collections::HashMap;

use crate::error::{Result, StoreError};
use crate::repository::RatingStore;
use crate::types::{Critic, CriticId, Movie, MovieId, Rating, Stars};

/// In-memory view of the whole dataset.
///
/// Ratings are keyed by their (movie_id, critic_id) pair, which makes the
/// composite-uniqueness invariant structural: a second rating by the same
/// pair can only ever overwrite the first. Secondary indices map each movie
/// and each critic to the pairs that reference them.
#[derive(Debug, Default, Clone)]
pub struct Catalog {
    // Primary data stores
    movies: HashMap<MovieId, Movie>,
    critics: HashMap<CriticId, Critic>,
    ratings: HashMap<(MovieId, CriticId), Rating>,

    // Rating indices for fast lookups
    /// Critics that have rated each movie
    movie_ratings: HashMap<MovieId, Vec<CriticId>>,
    /// Movies rated by each critic
    critic_ratings: HashMap<CriticId, Vec<MovieId>>,
}

impl Catalog {
    /// Creates a new, empty Catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a movie (seed/loader use only; the engine never creates movies)
    pub fn insert_movie(&mut self, movie: Movie) {
        self.movies.insert(movie.id, movie);
    }

    /// Insert a critic (seed/loader use only; the engine never creates critics)
    pub fn insert_critic(&mut self, critic: Critic) {
        self.critics.insert(critic.id, critic);
    }

    /// Counts for logging and validation: (movies, critics, ratings)
    pub fn counts(&self) -> (usize, usize, usize) {
        (self.movies.len(), self.critics.len(), self.ratings.len())
    }

    /// All movies in the dataset, in arbitrary order
    pub fn movies(&self) -> impl Iterator<Item = &Movie> {
        self.movies.values()
    }

    /// All critics in the dataset, in arbitrary order
    pub fn critics(&self) -> impl Iterator<Item = &Critic> {
        self.critics.values()
    }

    /// All ratings in the dataset, in arbitrary order
    pub fn ratings(&self) -> impl Iterator<Item = &Rating> {
        self.ratings.values()
    }
}

impl RatingStore for Catalog {
    fn find_movie(&self, id: MovieId) -> Option<&Movie> {
        self.movies.get(&id)
    }

    fn find_critic(&self, id: CriticId) -> Option<&Critic> {
        self.critics.get(&id)
    }

    fn find_rating(&self, movie_id: MovieId, critic_id: CriticId) -> Option<&Rating> {
        self.ratings.get(&(movie_id, critic_id))
    }

    fn all_movie_ids(&self) -> Vec<MovieId> {
        self.movies.keys().copied().collect()
    }

    fn critics_with_ratings(&self) -> Vec<CriticId> {
        self.critic_ratings
            .iter()
            .filter(|(_, movies)| !movies.is_empty())
            .map(|(&id, _)| id)
            .collect()
    }

    fn ratings_for_movie(&self, id: MovieId) -> Vec<Rating> {
        self.movie_ratings
            .get(&id)
            .map(|critics| {
                critics
                    .iter()
                    .filter_map(|&critic_id| self.ratings.get(&(id, critic_id)).copied())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn ratings_for_critic(&self, id: CriticId) -> Vec<Rating> {
        self.critic_ratings
            .get(&id)
            .map(|movies| {
                movies
                    .iter()
                    .filter_map(|&movie_id| self.ratings.get(&(movie_id, id)).copied())
                    .collect()
            })
            .unwrap_or_default()
    }

    fn create_rating(
        &mut self,
        movie_id: MovieId,
        critic_id: CriticId,
        stars: Stars,
    ) -> Result<()> {
        // Referential integrity first: an unknown id must never turn into
        // an implicitly created movie or critic.
        if !self.movies.contains_key(&movie_id) {
            return Err(StoreError::MovieNotFound { id: movie_id });
        }
        if !self.critics.contains_key(&critic_id) {
            return Err(StoreError::CriticNotFound { id: critic_id });
        }

        let key = (movie_id, critic_id);
        if self.ratings.contains_key(&key) {
            return Err(StoreError::DuplicateRating {
                movie_id,
                critic_id,
            });
        }

        self.ratings.insert(
            key,
            Rating {
                movie_id,
                critic_id,
                stars,
            },
        );
        self.movie_ratings.entry(movie_id).or_default().push(critic_id);
        self.critic_ratings.entry(critic_id).or_default().push(movie_id);
        Ok(())
    }

    fn set_rating_stars(
        &mut self,
        movie_id: MovieId,
        critic_id: CriticId,
        stars: Stars,
    ) -> Result<()> {
        // Overwrite in place; indices already know this pair
        let rating = self
            .ratings
            .get_mut(&(movie_id, critic_id))
            .ok_or(StoreError::RatingNotFound {
                movie_id,
                critic_id,
            })?;
        rating.stars = stars;
        Ok(())
    }

    fn set_critic_weight(&mut self, id: CriticId, weight: f64) -> Result<()> {
        let critic = self
            .critics
            .get_mut(&id)
            .ok_or(StoreError::CriticNotFound { id })?;
        critic.rating_weight = weight;
        Ok(())
    }

    fn set_movie_average(&mut self, id: MovieId, average: Option<f64>) -> Result<()> {
        let movie = self
            .movies
            .get_mut(&id)
            .ok_or(StoreError::MovieNotFound { id })?;
        movie.average_rating = average;
        Ok(())
    }

    /// In-memory commit is a no-op; mutations are already visible
    fn commit(&mut self) -> Result<()> {
        Ok(())
    }
}

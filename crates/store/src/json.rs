//! JSON-file-backed store with an atomic commit.
//!
//! The dataset lives in a single JSON document:
//!
//! ```json
//! {
//!   "movies":  [ { "id": 1, "average_rating": 3.0 }, ... ],
//!   "critics": [ { "id": 7, "rating_weight": 1.0 }, ... ],
//!   "ratings": [ { "movie_id": 1, "critic_id": 7, "stars": 4 }, ... ]
//! }
//! ```
//!
//! `JsonStore` loads it into a [`Catalog`], serves every read and write from
//! memory, and on `commit` serializes the whole catalog to a temp file next
//! to the original and renames it into place. The rename is the atomicity
//! boundary: a run that fails before commit leaves the file byte-identical.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{Result, StoreError};
use crate::repository::RatingStore;
use crate::types::{Critic, CriticId, Movie, MovieId, Rating, Stars};

/// On-disk shape of the dataset file
#[derive(Debug, Serialize, Deserialize)]
struct Dataset {
    movies: Vec<Movie>,
    critics: Vec<Critic>,
    ratings: Vec<Rating>,
}

impl Dataset {
    /// Validate and index a parsed dataset.
    ///
    /// Rejects duplicate ids, duplicate (movie, critic) pairs, and ratings
    /// whose movie or critic doesn't exist in the same file.
    fn into_catalog(self) -> Result<Catalog> {
        let mut catalog = Catalog::new();

        for movie in &self.movies {
            if catalog.find_movie(movie.id).is_some() {
                return Err(StoreError::InvalidDataset {
                    reason: format!("duplicate movie id {}", movie.id),
                });
            }
            catalog.insert_movie(*movie);
        }

        for critic in &self.critics {
            if catalog.find_critic(critic.id).is_some() {
                return Err(StoreError::InvalidDataset {
                    reason: format!("duplicate critic id {}", critic.id),
                });
            }
            catalog.insert_critic(*critic);
        }

        for rating in &self.ratings {
            // create_rating enforces referential integrity and pair
            // uniqueness in one place
            catalog
                .create_rating(rating.movie_id, rating.critic_id, rating.stars)
                .map_err(|e| StoreError::InvalidDataset {
                    reason: e.to_string(),
                })?;
        }

        Ok(catalog)
    }

    /// Snapshot a catalog back into on-disk shape, sorted by id so commits
    /// produce stable diffs.
    fn from_catalog(catalog: &Catalog) -> Self {
        let mut movies: Vec<Movie> = catalog.movies().copied().collect();
        let mut critics: Vec<Critic> = catalog.critics().copied().collect();
        let mut ratings: Vec<Rating> = catalog.ratings().copied().collect();
        movies.sort_by_key(|m| m.id);
        critics.sort_by_key(|c| c.id);
        ratings.sort_by_key(|r| (r.movie_id, r.critic_id));
        Self {
            movies,
            critics,
            ratings,
        }
    }
}

/// A [`Catalog`] loaded from a JSON file, committed back atomically.
#[derive(Debug)]
pub struct JsonStore {
    catalog: Catalog,
    path: PathBuf,
}

impl JsonStore {
    /// Load the dataset file at `path` into memory.
    ///
    /// # Errors
    /// I/O errors, malformed JSON, or a dataset that fails validation.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let dataset: Dataset = serde_json::from_str(&contents)?;
        let catalog = dataset.into_catalog()?;

        let (movies, critics, ratings) = catalog.counts();
        debug!(movies, critics, ratings, "loaded dataset from {}", path.display());

        Ok(Self {
            catalog,
            path: path.to_path_buf(),
        })
    }

    /// The in-memory view, for read-only inspection
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl RatingStore for JsonStore {
    fn find_movie(&self, id: MovieId) -> Option<&Movie> {
        self.catalog.find_movie(id)
    }

    fn find_critic(&self, id: CriticId) -> Option<&Critic> {
        self.catalog.find_critic(id)
    }

    fn find_rating(&self, movie_id: MovieId, critic_id: CriticId) -> Option<&Rating> {
        self.catalog.find_rating(movie_id, critic_id)
    }

    fn all_movie_ids(&self) -> Vec<MovieId> {
        self.catalog.all_movie_ids()
    }

    fn critics_with_ratings(&self) -> Vec<CriticId> {
        self.catalog.critics_with_ratings()
    }

    fn ratings_for_movie(&self, id: MovieId) -> Vec<Rating> {
        self.catalog.ratings_for_movie(id)
    }

    fn ratings_for_critic(&self, id: CriticId) -> Vec<Rating> {
        self.catalog.ratings_for_critic(id)
    }

    fn create_rating(
        &mut self,
        movie_id: MovieId,
        critic_id: CriticId,
        stars: Stars,
    ) -> Result<()> {
        self.catalog.create_rating(movie_id, critic_id, stars)
    }

    fn set_rating_stars(
        &mut self,
        movie_id: MovieId,
        critic_id: CriticId,
        stars: Stars,
    ) -> Result<()> {
        self.catalog.set_rating_stars(movie_id, critic_id, stars)
    }

    fn set_critic_weight(&mut self, id: CriticId, weight: f64) -> Result<()> {
        self.catalog.set_critic_weight(id, weight)
    }

    fn set_movie_average(&mut self, id: MovieId, average: Option<f64>) -> Result<()> {
        self.catalog.set_movie_average(id, average)
    }

    fn commit(&mut self) -> Result<()> {
        let dataset = Dataset::from_catalog(&self.catalog);
        let json = serde_json::to_string_pretty(&dataset)?;

        // Write-then-rename keeps the previous file intact if anything
        // before the rename fails.
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let tmp = NamedTempFile::new_in(dir)?;
        std::fs::write(tmp.path(), json)?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        debug!("committed dataset to {}", self.path.display());
        Ok(())
    }
}

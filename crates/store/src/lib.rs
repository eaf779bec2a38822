//! # Store Crate
//!
//! This crate holds the movie review dataset and its persistence boundary.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (Movie, Critic, Rating)
//! - **repository**: The `RatingStore` trait the engine is written against
//! - **catalog**: In-memory implementation with HashMap indices
//! - **json**: JSON-file-backed store with an atomic write-then-rename commit
//! - **error**: Error types for loading, lookups, and commits
//!
//! ## Example Usage
//!
//! ```ignore
//! use store::{JsonStore, RatingStore};
//! use std::path::Path;
//!
//! let mut store = JsonStore::load(Path::new("data/reviews.json"))?;
//! store.create_rating(1, 7, 4)?;
//! store.commit()?;
//! ```

// Public modules
pub mod catalog;
pub mod error;
pub mod json;
pub mod repository;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::Catalog;
pub use error::{Result, StoreError};
pub use json::JsonStore;
pub use repository::RatingStore;
pub use types::{
    // Type aliases
    CriticId,
    MovieId,
    Stars,
    // Core types
    Critic,
    Movie,
    Rating,
    // Constants
    DEFAULT_RATING_WEIGHT,
};

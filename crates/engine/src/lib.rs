//! # Engine Crate
//!
//! The recalculation engine: turn one incoming star rating into updated
//! critic weights and movie averages across the whole dataset.
//!
//! ## Main Components
//!
//! - **upsert**: Record or overwrite one critic's rating for one movie
//! - **weights**: Derive each critic's weight from their mean disparity
//!   against pre-update movie averages
//! - **averages**: Recompute each movie's weight-weighted average rating
//! - **update**: The strict pass sequence (upsert → weights → averages →
//!   commit → summary) for one invocation
//! - **error**: Error types for the engine
//!
//! ## Architecture
//! The engine is written against the `RatingStore` trait from the store
//! crate, never a concrete store. Both passes are single full scans with
//! disjoint read and write sets, so each one observes a consistent
//! snapshot without any locking.
//!
//! ## Example Usage
//! ```ignore
//! use engine::apply_rating;
//! use store::JsonStore;
//!
//! let mut store = JsonStore::load(Path::new("data/reviews.json"))?;
//! let summary = apply_rating(&mut store, movie_id, critic_id, stars)?;
//! println!("New critic rating weight: {:.1}", summary.critic_weight);
//! ```

pub mod averages;
pub mod error;
pub mod update;
pub mod upsert;
pub mod weights;

// Re-export main types
pub use averages::recalculate_movie_averages;
pub use error::{EngineError, Result};
pub use update::{UpdateSummary, apply_rating, summarize};
pub use upsert::upsert_rating;
pub use weights::{recalculate_critic_weights, weight_for_disparity};

//! Rating upsert: record or overwrite one critic's stars for one movie.

use store::{CriticId, MovieId, RatingStore, Stars};

use crate::error::Result;

/// Create the rating for `(movie_id, critic_id)` if the pair has none,
/// otherwise overwrite its stars. No other field changes.
///
/// # Errors
/// Not-found errors from the store if the movie or critic doesn't exist;
/// the pair's movie and critic are never created implicitly.
pub fn upsert_rating(
    store: &mut impl RatingStore,
    movie_id: MovieId,
    critic_id: CriticId,
    stars: Stars,
) -> Result<()> {
    if store.find_rating(movie_id, critic_id).is_some() {
        store.set_rating_stars(movie_id, critic_id, stars)?;
    } else {
        store.create_rating(movie_id, critic_id, stars)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{Catalog, Critic, Movie, RatingStore, StoreError};

    fn seeded() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert_movie(Movie::new(1));
        catalog.insert_critic(Critic::new(7));
        catalog
    }

    #[test]
    fn test_upsert_twice_leaves_one_rating_with_latest_stars() {
        let mut catalog = seeded();

        upsert_rating(&mut catalog, 1, 7, 4).unwrap();
        upsert_rating(&mut catalog, 1, 7, 2).unwrap();

        assert_eq!(catalog.counts().2, 1);
        assert_eq!(catalog.find_rating(1, 7).unwrap().stars, 2);
    }

    #[test]
    fn test_upsert_unknown_movie_fails() {
        let mut catalog = seeded();

        let err = upsert_rating(&mut catalog, 99, 7, 4).unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::Store(StoreError::MovieNotFound { id: 99 })
        ));
    }

    #[test]
    fn test_upsert_unknown_critic_fails() {
        let mut catalog = seeded();

        let err = upsert_rating(&mut catalog, 1, 99, 4).unwrap_err();
        assert!(matches!(
            err,
            crate::EngineError::Store(StoreError::CriticNotFound { id: 99 })
        ));
    }
}

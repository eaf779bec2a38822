//! End-to-end tests for the full pass sequence, run against both the
//! in-memory catalog and the file-backed store.

use engine::{EngineError, apply_rating};
use store::{Catalog, Critic, JsonStore, Movie, RatingStore};
use tempfile::TempDir;

/// The scenario pinned down by the engine's contract:
///
/// - Critic 1 previously rated movie 100 as 5 stars while its average was
///   3.0. That disparity is exactly 2.0, not above the high threshold, so
///   their weight stays 1.0.
/// - Movie 200 holds one rating, 4 stars from critic 2 at weight 1.0, so
///   its pre-update average is 4.0.
/// - Critic 1 now rates movie 200 with 1 star.
fn scenario() -> Catalog {
    let mut catalog = Catalog::new();
    catalog.insert_movie(Movie {
        id: 100,
        average_rating: Some(3.0),
    });
    catalog.insert_movie(Movie {
        id: 200,
        average_rating: Some(4.0),
    });
    catalog.insert_critic(Critic::new(1));
    catalog.insert_critic(Critic::new(2));
    catalog.create_rating(100, 1, 5).unwrap();
    catalog.create_rating(200, 2, 4).unwrap();
    catalog
}

#[test]
fn one_star_review_from_trusted_critic_drags_average_down() {
    let mut catalog = scenario();

    let summary = apply_rating(&mut catalog, 200, 1, 1).unwrap();

    // Weight judged on the past rating only: disparity 2.0 → weight 1.0
    assert_eq!(summary.critic_weight, 1.0);
    // (1*1.0 + 4*1.0) / (1.0 + 1.0)
    assert_eq!(summary.movie_average, 2.5);

    // Both derived fields landed in the store as well
    assert_eq!(catalog.find_critic(1).unwrap().rating_weight, 1.0);
    assert_eq!(catalog.find_movie(200).unwrap().average_rating, Some(2.5));
    // The untouched movie was still recomputed from its single rating
    assert_eq!(catalog.find_movie(100).unwrap().average_rating, Some(5.0));
}

#[test]
fn overwriting_a_rating_never_duplicates_it() {
    let mut catalog = scenario();

    apply_rating(&mut catalog, 200, 1, 1).unwrap();
    let summary = apply_rating(&mut catalog, 200, 1, 5).unwrap();

    assert_eq!(catalog.ratings_for_movie(200).len(), 2);
    assert_eq!(catalog.find_rating(200, 1).unwrap().stars, 5);

    // The second run judges critic 2 against movie 200's post-first-run
    // average of 2.5: disparity 1.5 → weight 0.33. Critic 1 sits at 0
    // disparity against movie 100 and stays at 1.0, so movie 200 lands at
    // (5*1.0 + 4*0.33) / 1.33.
    assert_eq!(summary.critic_weight, 1.0);
    assert!((summary.movie_average - 6.32 / 1.33).abs() < 1e-9);
}

#[test]
fn unknown_movie_aborts_before_any_recalculation() {
    let mut catalog = scenario();

    assert!(apply_rating(&mut catalog, 999, 1, 3).is_err());

    // No pass ran: pre-existing averages are untouched
    assert_eq!(catalog.find_movie(100).unwrap().average_rating, Some(3.0));
    assert_eq!(catalog.find_movie(200).unwrap().average_rating, Some(4.0));
}

#[test]
fn movie_with_no_ratings_keeps_absent_average() {
    let mut catalog = scenario();
    catalog.insert_movie(Movie::new(300));

    apply_rating(&mut catalog, 200, 1, 1).unwrap();

    assert_eq!(catalog.find_movie(300).unwrap().average_rating, None);
}

#[test]
fn full_run_commits_through_the_json_store() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("reviews.json");
    std::fs::write(
        &path,
        r#"{
            "movies":  [ { "id": 100, "average_rating": 3.0 },
                         { "id": 200, "average_rating": 4.0 } ],
            "critics": [ { "id": 1, "rating_weight": 1.0 },
                         { "id": 2, "rating_weight": 1.0 } ],
            "ratings": [ { "movie_id": 100, "critic_id": 1, "stars": 5 },
                         { "movie_id": 200, "critic_id": 2, "stars": 4 } ]
        }"#,
    )
    .unwrap();

    let mut store = JsonStore::load(&path).unwrap();
    let summary = apply_rating(&mut store, 200, 1, 1).unwrap();
    assert_eq!(summary.movie_average, 2.5);

    // A fresh load sees exactly what the run committed
    let reloaded = JsonStore::load(&path).unwrap();
    assert_eq!(reloaded.find_movie(200).unwrap().average_rating, Some(2.5));
    assert_eq!(reloaded.find_rating(200, 1).unwrap().stars, 1);
}

/// Test double: a store whose average write for one movie is lost, which
/// is the only way the summary can still find the average absent. Records
/// whether commit was called so the commit-before-summary ordering is
/// observable.
struct LossyStore {
    inner: Catalog,
    dropped_movie: store::MovieId,
    committed: bool,
}

impl RatingStore for LossyStore {
    fn find_movie(&self, id: store::MovieId) -> Option<&Movie> {
        self.inner.find_movie(id)
    }
    fn find_critic(&self, id: store::CriticId) -> Option<&Critic> {
        self.inner.find_critic(id)
    }
    fn find_rating(
        &self,
        movie_id: store::MovieId,
        critic_id: store::CriticId,
    ) -> Option<&store::Rating> {
        self.inner.find_rating(movie_id, critic_id)
    }
    fn all_movie_ids(&self) -> Vec<store::MovieId> {
        self.inner.all_movie_ids()
    }
    fn critics_with_ratings(&self) -> Vec<store::CriticId> {
        self.inner.critics_with_ratings()
    }
    fn ratings_for_movie(&self, id: store::MovieId) -> Vec<store::Rating> {
        self.inner.ratings_for_movie(id)
    }
    fn ratings_for_critic(&self, id: store::CriticId) -> Vec<store::Rating> {
        self.inner.ratings_for_critic(id)
    }
    fn create_rating(
        &mut self,
        movie_id: store::MovieId,
        critic_id: store::CriticId,
        stars: store::Stars,
    ) -> store::Result<()> {
        self.inner.create_rating(movie_id, critic_id, stars)
    }
    fn set_rating_stars(
        &mut self,
        movie_id: store::MovieId,
        critic_id: store::CriticId,
        stars: store::Stars,
    ) -> store::Result<()> {
        self.inner.set_rating_stars(movie_id, critic_id, stars)
    }
    fn set_critic_weight(&mut self, id: store::CriticId, weight: f64) -> store::Result<()> {
        self.inner.set_critic_weight(id, weight)
    }
    fn set_movie_average(
        &mut self,
        id: store::MovieId,
        average: Option<f64>,
    ) -> store::Result<()> {
        if id == self.dropped_movie {
            return Ok(());
        }
        self.inner.set_movie_average(id, average)
    }
    fn commit(&mut self) -> store::Result<()> {
        self.committed = true;
        Ok(())
    }
}

#[test]
fn summary_failure_happens_after_the_commit() {
    // Movie 200 starts with no average and the store loses its average
    // write, so the summary still finds it absent after a successful run.
    let mut inner = Catalog::new();
    inner.insert_movie(Movie::new(200));
    inner.insert_critic(Critic::new(1));
    let mut store = LossyStore {
        inner,
        dropped_movie: 200,
        committed: false,
    };

    let err = apply_rating(&mut store, 200, 1, 1).unwrap_err();
    assert!(matches!(
        err,
        EngineError::AverageUnavailable { movie_id: 200 }
    ));

    // The mutations were committed before the summary was attempted
    assert!(store.committed);
    assert_eq!(store.inner.find_rating(200, 1).unwrap().stars, 1);
}

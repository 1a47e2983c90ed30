use rand::{seq::SliceRandom, Rng};

use crate::{
    errors::{AppError, AppResult},
    models::domain::Question,
};

/// Draws the question set for one taking session: an unbiased full shuffle
/// of the pool (Fisher-Yates, via `SliceRandom::shuffle`) truncated to
/// `session_size`. A pool smaller than the session size is used whole.
///
/// Session randomness is statistical, not adversarial, so any well-seeded
/// `Rng` is acceptable; production uses `thread_rng`, tests seed a `StdRng`.
pub fn sample_session<R: Rng>(
    mut pool: Vec<Question>,
    session_size: usize,
    rng: &mut R,
) -> AppResult<Vec<Question>> {
    if pool.is_empty() {
        return Err(AppError::NoQuestions(
            "the question pool is empty".to_string(),
        ));
    }

    pool.shuffle(rng);
    pool.truncate(session_size);
    Ok(pool)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    fn make_pool(n: usize) -> Vec<Question> {
        (0..n)
            .map(|i| {
                fixtures::multiple_choice_question(
                    &format!("q-{}", i),
                    "quiz-1",
                    "Paris",
                    10,
                )
            })
            .collect()
    }

    #[test]
    fn returns_exactly_k_distinct_questions_from_the_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let pool = make_pool(20);
        let pool_ids: HashSet<String> = pool.iter().map(|q| q.id.clone()).collect();

        let session = sample_session(pool, 15, &mut rng).unwrap();

        assert_eq!(session.len(), 15);
        let session_ids: HashSet<String> = session.iter().map(|q| q.id.clone()).collect();
        assert_eq!(session_ids.len(), 15, "no repeats within a session");
        assert!(session_ids.is_subset(&pool_ids));
    }

    #[test]
    fn small_pool_is_used_whole_without_error() {
        let mut rng = StdRng::seed_from_u64(7);
        let session = sample_session(make_pool(4), 15, &mut rng).unwrap();

        assert_eq!(session.len(), 4);
    }

    #[test]
    fn empty_pool_is_rejected() {
        let mut rng = StdRng::seed_from_u64(7);
        let result = sample_session(Vec::new(), 15, &mut rng);

        match result {
            Err(AppError::NoQuestions(_)) => {}
            other => panic!("Expected NoQuestions, got {:?}", other.err()),
        }
    }

    #[test]
    fn first_position_distribution_is_uniform() {
        // Chi-square goodness of fit over which question lands first after
        // the shuffle. df = 3; 16.27 is the critical value at p = 0.001.
        const RUNS: usize = 4000;
        const POOL: usize = 4;

        let mut rng = StdRng::seed_from_u64(42);
        let mut observed = [0f64; POOL];

        for _ in 0..RUNS {
            let session = sample_session(make_pool(POOL), POOL, &mut rng).unwrap();
            let first: usize = session[0].id["q-".len()..].parse().unwrap();
            observed[first] += 1.0;
        }

        let expected = RUNS as f64 / POOL as f64;
        let chi_square: f64 = observed
            .iter()
            .map(|obs| (obs - expected).powi(2) / expected)
            .sum();

        assert!(
            chi_square < 16.27,
            "first-position distribution looks non-uniform (chi-square = {:.2})",
            chi_square
        );
    }
}

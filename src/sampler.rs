use rand::Rng;

use crate::error::QuizError;

/// Draws `k` distinct elements from `pool`, uniformly at random and
/// without replacement.
///
/// Indexes are drawn one at a time; a draw that collides with an
/// already accepted index is simply redrawn. The order in which the
/// indexes were accepted is the order of the returned elements, which
/// becomes presentation order. Cheap while `k` is small next to the
/// pool, degrades as `k` approaches the pool size.
pub fn sample<T: Clone, R: Rng>(pool: &[T], k: usize, rng: &mut R) -> Result<Vec<T>, QuizError> {
    if pool.is_empty() {
        return Err(QuizError::invalid_argument("pool must not be empty"));
    }
    if k == 0 {
        return Err(QuizError::invalid_argument("sample size must be positive"));
    }
    if k > pool.len() {
        return Err(QuizError::invalid_argument(format!(
            "sample size {} exceeds pool size {}",
            k,
            pool.len()
        )));
    }

    let mut indexes: Vec<usize> = Vec::with_capacity(k);
    indexes.push(rng.gen_range(0..pool.len()));
    while indexes.len() < k {
        let candidate = rng.gen_range(0..pool.len());
        if !indexes.contains(&candidate) {
            indexes.push(candidate);
        }
    }

    Ok(indexes.into_iter().map(|index| pool[index].clone()).collect())
}

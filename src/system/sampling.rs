//! Random primitives used by the generator.
//!
//! Both take the random source explicitly so seeded runs are reproducible.

use rand::Rng;
use rand_distr::{Distribution, Exp1};

/// Draw `amount` distinct indices from `0..len`, uniformly, in draw order.
///
/// Partial Fisher-Yates: the first `amount` slots of an index buffer are
/// shuffled into place, so the draw terminates after exactly `amount` steps.
/// `amount` is capped at `len`.
pub fn sample_indices<R: Rng + ?Sized>(rng: &mut R, len: usize, amount: usize) -> Vec<usize> {
    debug_assert!(amount <= len, "cannot draw {} of {}", amount, len);
    let amount = amount.min(len);
    let mut pool: Vec<usize> = (0..len).collect();
    for i in 0..amount {
        let j = rng.random_range(i..len);
        pool.swap(i, j);
    }
    pool.truncate(amount);
    pool
}

/// Draw `amount` distinct elements of `items`, in draw order
pub fn sample_distinct<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T], amount: usize) -> Vec<T> {
    sample_indices(rng, items.len(), amount)
        .into_iter()
        .map(|i| items[i])
        .collect()
}

/// Sample from the symmetric Dirichlet(1, .., 1) distribution of dimension `k`,
/// i.e. a uniform point on the (k-1)-simplex.
///
/// Uses the Gamma(1) construction: `k` unit-exponential draws normalized by
/// their sum.
pub fn dirichlet_uniform<R: Rng + ?Sized>(rng: &mut R, k: usize) -> Vec<f64> {
    let mut weights: Vec<f64> = (0..k)
        .map(|_| Distribution::<f64>::sample(&Exp1, &mut *rng))
        .collect();
    let total: f64 = weights.iter().sum();
    if total > 0.0 {
        for w in weights.iter_mut() {
            *w /= total;
        }
    } else if k > 0 {
        // every draw underflowed to zero
        weights.fill(1.0 / k as f64);
    }
    weights
}

//! Random partition of an ordered sequence into a sample and its complement.

use rand::Rng;

use crate::error::{Error, Result};

/// Partitions `items` into a uniformly random sample of size `n` and the rest.
///
/// The membership choice is a uniform random combination: every subset of
/// `n` positions is equally likely to be selected, independent of item
/// content. Both returned sequences keep the relative order the items had in
/// the input; only the partition choice is random, not the order within
/// either half.
///
/// The caller supplies the random source, so a seeded generator gives a
/// fully deterministic result.
///
/// # Errors
///
/// Returns [`Error::SampleSizeOutOfRange`] when `n` exceeds the number of
/// items. The size is never silently clamped.
pub fn sample<T>(items: Vec<T>, n: usize, rng: &mut impl Rng) -> Result<(Vec<T>, Vec<T>)> {
    if n > items.len() {
        return Err(Error::SampleSizeOutOfRange {
            size: n,
            available: items.len(),
        });
    }

    // Draw n distinct indices, then route each item in one in-order scan.
    let mut selected = vec![false; items.len()];
    for index in rand::seq::index::sample(rng, items.len(), n) {
        selected[index] = true;
    }

    let mut first = Vec::with_capacity(n);
    let mut second = Vec::with_capacity(items.len() - n);
    for (index, item) in items.into_iter().enumerate() {
        if selected[index] {
            first.push(item);
        } else {
            second.push(item);
        }
    }

    Ok((first, second))
}

//! Random permutation that never returns the input order.
//!
//! The permutation is built on positions and then checked against the
//! element values: when the sequence holds at least two distinct values,
//! some index of the result holds a different value than the input. A
//! sequence whose elements are all equal cannot change and comes back as
//! it was.

use rand::Rng;

/// Returns a shuffled copy of `sequence` using the thread-local generator.
///
/// See [`shuffle_with`] for the exact contract.
///
/// # Examples
///
/// ```rust
/// use underbar::ordering::shuffle;
///
/// let original = vec![1, 2, 3, 4];
/// let mut shuffled = shuffle(&original);
/// assert_ne!(shuffled, original);
/// shuffled.sort_unstable();
/// assert_eq!(shuffled, original);
/// ```
pub fn shuffle<T: Clone + PartialEq>(sequence: &[T]) -> Vec<T> {
    shuffle_with(sequence, &mut rand::thread_rng())
}

/// Returns a shuffled copy of `sequence` drawing randomness from `rng`.
///
/// - Zero or one element: returned unchanged.
/// - Two elements: always swapped, since the only alternative is the input
///   order.
/// - Three or more: each position `i` is swapped with a uniformly chosen
///   position at or after `i`. If that happens to reproduce the input
///   order, two distinct positions picked by the same procedure are
///   swapped.
/// - If the result still equals the input element by element (only equal
///   values traded places), a random position is swapped with a random
///   position holding a different value. All-equal sequences are returned
///   unchanged.
///
/// The input is never modified. The output distribution is close to, but
/// not exactly, uniform because the identity permutation is excluded.
///
/// # Examples
///
/// ```rust
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use underbar::ordering::shuffle_with;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let shuffled = shuffle_with(&['a', 'b'], &mut rng);
/// assert_eq!(shuffled, vec!['b', 'a']);
/// ```
pub fn shuffle_with<T, R>(sequence: &[T], rng: &mut R) -> Vec<T>
where
    T: Clone + PartialEq,
    R: Rng,
{
    let mut order = non_identity_permutation(sequence.len(), rng);
    if reproduces(sequence, &order)
        && let Some((first, second)) = distinct_pair(sequence, rng)
    {
        order.swap(first, second);
    }
    order
        .into_iter()
        .map(|position| sequence[position].clone())
        .collect()
}

fn non_identity_permutation<R: Rng>(length: usize, rng: &mut R) -> Vec<usize> {
    let mut order: Vec<usize> = (0..length).collect();
    match length {
        0 | 1 => return order,
        2 => {
            order.swap(0, 1);
            return order;
        }
        _ => {}
    }
    forward_shuffle(&mut order, rng);
    if is_identity(&order) {
        let mut picks: Vec<usize> = (0..length).collect();
        forward_shuffle(&mut picks, rng);
        order.swap(picks[0], picks[1]);
    }
    order
}

fn forward_shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    let length = slice.len();
    for position in 0..length {
        let chosen = rng.gen_range(position..length);
        slice.swap(position, chosen);
    }
}

fn reproduces<T: PartialEq>(sequence: &[T], order: &[usize]) -> bool {
    order
        .iter()
        .enumerate()
        .all(|(position, &source)| sequence[source] == sequence[position])
}

/// Two positions holding unequal values, or `None` when every element is
/// equal. Any position has a partner once two distinct values exist.
fn distinct_pair<T: PartialEq, R: Rng>(sequence: &[T], rng: &mut R) -> Option<(usize, usize)> {
    if sequence.is_empty() {
        return None;
    }
    let first = rng.gen_range(0..sequence.len());
    let partners: Vec<usize> = (0..sequence.len())
        .filter(|&position| sequence[position] != sequence[first])
        .collect();
    if partners.is_empty() {
        return None;
    }
    Some((first, partners[rng.gen_range(0..partners.len())]))
}

fn is_identity(order: &[usize]) -> bool {
    order
        .iter()
        .enumerate()
        .all(|(position, &source)| position == source)
}

//! Depth-first flattening of nested sequences.

use crate::value::Value;

/// One level of a nested structure: either a branch holding children or a
/// leaf.
#[derive(Debug)]
pub enum Nesting<'a, N, L> {
    /// A sequence of nested children.
    Branch(&'a [N]),
    /// A value that is not a sequence.
    Leaf(&'a L),
}

/// Structures that may contain sequences of themselves.
pub trait Nested: Sized {
    /// The type produced for every non-sequence leaf.
    type Leaf;

    /// Splits `self` into a branch or a leaf.
    fn nesting(&self) -> Nesting<'_, Self, Self::Leaf>;
}

/// Sequences are branches; every other value is a leaf.
impl Nested for Value {
    type Leaf = Self;

    fn nesting(&self) -> Nesting<'_, Self, Self> {
        match self {
            Self::Sequence(elements) => Nesting::Branch(elements),
            other => Nesting::Leaf(other),
        }
    }
}

/// A typed tree of leaves and branches.
///
/// # Examples
///
/// ```rust
/// use underbar::ordering::{Nest, flatten};
///
/// let tree = Nest::branch([Nest::leaf(1), Nest::branch([Nest::leaf(2), Nest::leaf(3)])]);
/// assert_eq!(flatten(&tree), vec![1, 2, 3]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nest<T> {
    /// A single value.
    Leaf(T),
    /// A sequence of subtrees.
    Branch(Vec<Nest<T>>),
}

impl<T> Nest<T> {
    /// Creates a leaf.
    #[inline]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Creates a branch from subtrees.
    pub fn branch<I: IntoIterator<Item = Self>>(children: I) -> Self {
        Self::Branch(children.into_iter().collect())
    }
}

impl<T> Nested for Nest<T> {
    type Leaf = T;

    fn nesting(&self) -> Nesting<'_, Self, T> {
        match self {
            Self::Leaf(value) => Nesting::Leaf(value),
            Self::Branch(children) => Nesting::Branch(children),
        }
    }
}

/// Returns every leaf, left to right and depth first.
///
/// Nesting depth is unbounded; traversal uses an explicit stack rather
/// than recursion. A leaf passed at the top level is returned as a
/// single-element sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::ordering::flatten;
/// use underbar::value::Value;
/// use underbar::values;
///
/// let nested = Value::from(serde_json::json!([1, [2, [3, [4]], 5]]));
/// assert_eq!(flatten(&nested), values![1, 2, 3, 4, 5]);
/// assert_eq!(flatten(&Value::from("solo")), values!["solo"]);
/// ```
pub fn flatten<N>(nested: &N) -> Vec<N::Leaf>
where
    N: Nested,
    N::Leaf: Clone,
{
    let mut leaves = Vec::new();
    let mut stack = match nested.nesting() {
        Nesting::Leaf(leaf) => return vec![leaf.clone()],
        Nesting::Branch(children) => vec![children.iter()],
    };
    while let Some(level) = stack.last_mut() {
        match level.next() {
            None => {
                stack.pop();
            }
            Some(child) => match child.nesting() {
                Nesting::Leaf(leaf) => leaves.push(leaf.clone()),
                Nesting::Branch(children) => stack.push(children.iter()),
            },
        }
    }
    leaves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;
    use rstest::rstest;

    #[rstest]
    fn empty_branches_contribute_nothing() {
        let nested = Value::from(serde_json::json!([[], [[]], 1]));
        assert_eq!(flatten(&nested), values![1]);
    }

    #[rstest]
    fn mappings_are_leaves() {
        let nested = Value::Sequence(vec![Value::mapping([("a", 1)])]);
        assert_eq!(flatten(&nested), vec![Value::mapping([("a", 1)])]);
    }

    #[rstest]
    fn deep_nesting_does_not_overflow() {
        let mut tree = Nest::leaf(7);
        for _ in 0..10_000 {
            tree = Nest::branch([tree]);
        }
        assert_eq!(flatten(&tree), vec![7]);
        // dropping the tree recurses; unwind it level by level
        while let Nest::Branch(mut children) = tree {
            tree = children.pop().unwrap_or(Nest::leaf(0));
        }
    }
}

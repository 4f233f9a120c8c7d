//! Iteration over sequences and mappings.
//!
//! This module provides the [`Collection`] trait, which lets the same
//! traversal functions run over ordered sequences (`Vec`, slices, arrays,
//! `VecDeque`) and keyed mappings (`BTreeMap`, `HashMap`, `IndexMap`), as
//! well as over a dynamic [`Value`].
//!
//! # Overview
//!
//! The iteration core:
//!
//! - [`each`]: Visit every entry for side effects
//! - [`map`]: Transform every entry into a new sequence
//! - [`filter`]: Keep the entries whose predicate is strictly `true`
//! - [`reduce`]: Left fold with an optional seed
//! - [`fold`]: Left fold with a mandatory seed
//!
//! Derived operations built on top of it:
//!
//! - [`reject`], [`every`], [`some`]: truthiness tests
//! - [`index_of`], [`contains`]: membership
//! - [`pluck`]: field extraction from dynamic values
//!
//! # Examples
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use underbar::collection::{map, reduce};
//!
//! let numbers = vec![1, 2, 3];
//! assert_eq!(map(&numbers, |number| number * 10), vec![10, 20, 30]);
//!
//! let prices = BTreeMap::from([("apple", 3), ("pear", 4)]);
//! assert_eq!(reduce(&prices, |total, price| total + price, None), Some(7));
//! ```

mod derived;
mod iteration;
mod truth;

use std::collections::{BTreeMap, HashMap, VecDeque};

use indexmap::IndexMap;

use crate::value::Value;

pub use derived::{contains, every, index_of, pluck, reject, some};
pub use iteration::{each, filter, fold, map, reduce};
pub use truth::Truth;

/// A finite collection whose entries can be visited in a stable order.
///
/// Sequences visit their elements in index order and use the index as the
/// key. Mappings visit their entries in their own enumeration order and
/// use a reference to the map key.
///
/// # Examples
///
/// ```rust
/// use underbar::collection::Collection;
///
/// let letters = ['a', 'b'];
/// let keys: Vec<usize> = letters.entries().map(|(index, _)| index).collect();
/// assert_eq!(keys, vec![0, 1]);
/// ```
pub trait Collection {
    /// The element type.
    type Item;

    /// The key handed to iterators alongside each element.
    type Key<'a>: Copy
    where
        Self: 'a;

    /// Returns every `(key, element)` pair in visiting order.
    fn entries<'a>(&'a self) -> impl Iterator<Item = (Self::Key<'a>, &'a Self::Item)> + 'a;

    /// Returns the number of entries.
    fn size(&self) -> usize {
        self.entries().count()
    }
}

impl<T> Collection for [T] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries<'a>(&'a self) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        self.iter().enumerate()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries<'a>(&'a self) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        self.iter().enumerate()
    }

    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries<'a>(&'a self) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        self.iter().enumerate()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for VecDeque<T> {
    type Item = T;
    type Key<'a>
        = usize
    where
        Self: 'a;

    fn entries<'a>(&'a self) -> impl Iterator<Item = (usize, &'a T)> + 'a {
        self.iter().enumerate()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V> Collection for BTreeMap<K, V> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for HashMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

impl<K, V, S> Collection for IndexMap<K, V, S> {
    type Item = V;
    type Key<'a>
        = &'a K
    where
        Self: 'a;

    fn entries<'a>(&'a self) -> impl Iterator<Item = (&'a K, &'a V)> + 'a {
        self.iter()
    }

    fn size(&self) -> usize {
        self.len()
    }
}

/// The key of an entry in a dynamic [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKey<'a> {
    /// Position within a sequence.
    Index(usize),
    /// Name within a mapping.
    Name(&'a str),
}

/// Sequences and mappings visit their entries; every other value has none.
impl Collection for Value {
    type Item = Self;
    type Key<'a> = ValueKey<'a>;

    fn entries<'a>(&'a self) -> impl Iterator<Item = (ValueKey<'a>, &'a Self)> + 'a {
        let (elements, entries) = match self {
            Self::Sequence(elements) => (Some(elements), None),
            Self::Mapping(entries) => (None, Some(entries)),
            _ => (None, None),
        };
        let from_sequence = elements
            .into_iter()
            .flat_map(|elements| elements.iter().enumerate())
            .map(|(index, element)| (ValueKey::Index(index), element));
        let from_mapping = entries
            .into_iter()
            .flat_map(IndexMap::iter)
            .map(|(name, value)| (ValueKey::Name(name.as_str()), value));
        from_sequence.chain(from_mapping)
    }

    fn size(&self) -> usize {
        match self {
            Self::Sequence(elements) => elements.len(),
            Self::Mapping(entries) => entries.len(),
            _ => 0,
        }
    }
}

//! Immutable ordered sequences.

use serde::{Deserialize, Serialize};

/// An immutable, insertion-order-preserving sequence.
///
/// `Sequence` is the collection every combinator in the workspace operates
/// on. There are no mutating methods: combinators borrow their input and
/// return a new sequence, so a value handed to one remains observable and
/// unchanged afterwards.
///
/// Serializes transparently as a plain array.
///
/// # Examples
///
/// ```
/// use sequent_types::Sequence;
///
/// let s = Sequence::from(vec![1, 2, 3]);
/// assert_eq!(s.len(), 3);
/// assert_eq!(s.first(), Some(&1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<T> {
    items: Vec<T>,
}

impl<T> Sequence<T> {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The element at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// The first element, if any.
    pub fn first(&self) -> Option<&T> {
        self.items.first()
    }

    /// The last element, if any.
    pub fn last(&self) -> Option<&T> {
        self.items.last()
    }

    /// Iterates over the elements in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Views the elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Unwraps the sequence into its backing vector.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

// Hand-written so `Sequence<T>: Default` holds without `T: Default`.
impl<T> Default for Sequence<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<Vec<T>> for Sequence<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T, const N: usize> From<[T; N]> for Sequence<T> {
    fn from(items: [T; N]) -> Self {
        Self {
            items: items.into(),
        }
    }
}

impl<T> FromIterator<T> for Sequence<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for Sequence<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Sequence<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

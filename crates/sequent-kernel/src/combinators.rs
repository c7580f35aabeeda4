//! Sequence combinators.
//!
//! Each combinator borrows its input and returns a fresh value. The
//! `try_*` forms take fallible closures; they abort at the first failing
//! element and return that error unchanged, so no partial result is ever
//! observable.

use sequent_types::Sequence;

/// Applies `f` to every element, producing a sequence of the results.
///
/// The output has the same length and order as the input; `f` is called
/// exactly once per element and never for positions that do not exist.
///
/// # Examples
///
/// ```
/// use sequent_kernel::map;
/// use sequent_types::Sequence;
///
/// let s = Sequence::from([1, 2, 3]);
/// assert_eq!(map(|n| n + 1, &s), Sequence::from([2, 3, 4]));
/// ```
pub fn map<T, U, F>(f: F, input: &Sequence<T>) -> Sequence<U>
where
    F: FnMut(&T) -> U,
{
    input.iter().map(f).collect()
}

/// Fallible [`map`]: stops at the first element for which `f` errors.
///
/// # Errors
///
/// Returns the first error produced by `f`, unchanged. Elements after the
/// failing one are not evaluated.
pub fn try_map<T, U, E, F>(mut f: F, input: &Sequence<T>) -> Result<Sequence<U>, E>
where
    F: FnMut(&T) -> Result<U, E>,
{
    let mut out = Vec::with_capacity(input.len());
    for item in input {
        out.push(f(item)?);
    }
    Ok(Sequence::from(out))
}

/// Keeps the elements satisfying `predicate`, in their original order.
///
/// # Examples
///
/// ```
/// use sequent_kernel::filter;
/// use sequent_types::Sequence;
///
/// let s = Sequence::from([1, 2, 3, 4]);
/// assert_eq!(filter(|n| n % 2 == 0, &s), Sequence::from([2, 4]));
/// ```
pub fn filter<T, P>(mut predicate: P, input: &Sequence<T>) -> Sequence<T>
where
    T: Clone,
    P: FnMut(&T) -> bool,
{
    input
        .iter()
        .filter(|item| predicate(item))
        .cloned()
        .collect()
}

/// Fallible [`filter`]: stops at the first element for which `predicate`
/// errors.
///
/// # Errors
///
/// Returns the first error produced by `predicate`, unchanged.
pub fn try_filter<T, E, P>(mut predicate: P, input: &Sequence<T>) -> Result<Sequence<T>, E>
where
    T: Clone,
    P: FnMut(&T) -> Result<bool, E>,
{
    let mut out = Vec::new();
    for item in input {
        if predicate(item)? {
            out.push(item.clone());
        }
    }
    Ok(Sequence::from(out))
}

/// Reduces the sequence left to right with `combine`, starting from `init`.
///
/// Application order is part of the contract: for the input
/// `[e1, e2, ..., en]` the result is
/// `combine(...combine(combine(init, e1), e2)..., en)`, which is
/// observable whenever `combine` is non-commutative (string
/// concatenation, subtraction). An empty sequence returns `init`
/// unchanged.
///
/// # Examples
///
/// ```
/// use sequent_kernel::fold;
/// use sequent_types::Sequence;
///
/// let s = Sequence::from([1, 2, 3, 4]);
/// assert_eq!(fold(|acc, n| acc + n, 0, &s), 10);
/// assert_eq!(fold(|acc, n| acc * n, 1, &s), 24);
/// ```
pub fn fold<T, A, F>(mut combine: F, init: A, input: &Sequence<T>) -> A
where
    F: FnMut(A, &T) -> A,
{
    let mut acc = init;
    for item in input {
        acc = combine(acc, item);
    }
    acc
}

/// Fallible [`fold`]: aborts the reduction at the first combiner error.
///
/// # Errors
///
/// Returns the first error produced by `combine`, unchanged. Elements
/// after the failing one are not evaluated.
pub fn try_fold<T, A, E, F>(mut combine: F, init: A, input: &Sequence<T>) -> Result<A, E>
where
    F: FnMut(A, &T) -> Result<A, E>,
{
    let mut acc = init;
    for item in input {
        acc = combine(acc, item)?;
    }
    Ok(acc)
}

/// Inserts `delimiter` between every pair of adjacent elements.
///
/// A single-element sequence comes back as-is, and an empty sequence
/// yields an empty sequence (the operation is an identity on inputs with
/// fewer than two elements).
///
/// Iterative on purpose: per-element recursion would grow the call stack
/// linearly with the input and Rust does not guarantee tail-call
/// elimination.
///
/// # Examples
///
/// ```
/// use sequent_kernel::intersperse;
/// use sequent_types::Sequence;
///
/// let s = Sequence::from(["a", "b", "c"]);
/// assert_eq!(
///     intersperse(",", &s),
///     Sequence::from(["a", ",", "b", ",", "c"]),
/// );
/// ```
pub fn intersperse<T>(delimiter: T, input: &Sequence<T>) -> Sequence<T>
where
    T: Clone,
{
    let mut out = Vec::with_capacity(input.len().saturating_mul(2).saturating_sub(1));
    for item in input {
        if !out.is_empty() {
            out.push(delimiter.clone());
        }
        out.push(item.clone());
    }
    Sequence::from(out)
}

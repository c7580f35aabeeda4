//! # sequent-kernel: Pure combinator core for `Sequent`
//!
//! The kernel is the pure functional core of the workspace: a handful of
//! combinators over [`Sequence`](sequent_types::Sequence) and
//! [`Record`](sequent_types::Record). No IO, no clocks, no randomness -
//! every function is deterministic and leaves its arguments untouched,
//! which makes every code path testable without mocks.
//!
//! Sequence arguments come last so a partially applied combinator reads
//! like the operation it performs:
//!
//! ```
//! use sequent_kernel::{fold, map};
//! use sequent_types::Sequence;
//!
//! let s = Sequence::from([1, 2, 3, 4]);
//! let doubled = map(|n| n * 2, &s);
//! let sum = fold(|acc, n| acc + n, 0, &doubled);
//! assert_eq!(sum, 20);
//! ```
//!
//! Failure never hides inside a combinator: the infallible forms take
//! closures that cannot fail, and the `try_*` forms stop at the first
//! element whose closure errors and hand that error back unchanged.

mod accessor;
mod combinators;

pub use accessor::get;
pub use combinators::{filter, fold, intersperse, map, try_filter, try_fold, try_map};
// The missing-field condition is defined next to `Record`; re-exported so
// kernel callers name one crate.
pub use sequent_types::FieldError;

//! # Sequent
//!
//! Small pure-functional combinator library: immutable sequences and
//! records, a handful of combinators over them, and a pipeline for
//! chaining unary transformations.
//!
//! Every operation is pure - same inputs, same outputs, no mutation of
//! arguments. "Modification" always means a new value.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │                        Sequent                         │
//! │  ┌────────────┐   ┌───────────────┐   ┌────────────┐   │
//! │  │   Types    │ → │    Kernel     │ → │  Pipeline  │   │
//! │  │ (Sequence, │   │ (map/filter/  │   │  (chained  │   │
//! │  │  Record)   │   │  fold/get/…)  │   │ transforms)│   │
//! │  └────────────┘   └───────────────┘   └────────────┘   │
//! └────────────────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```
//! use sequent::{Pipeline, Sequence, filter, fold, intersperse, map};
//!
//! let total = Pipeline::new(Sequence::from([1, 2, 3, 4, 5, 6]))
//!     .advance(|s| filter(|n| n % 2 == 0, &s))
//!     .advance(|s| map(|n| n * 10, &s))
//!     .advance(|s| fold(|acc, n| acc + n, 0, &s))
//!     .into_value();
//! assert_eq!(total, 120);
//! ```
//!
//! Record fields come out through the curried accessor:
//!
//! ```
//! use sequent::{Record, Sequence, get, try_map};
//!
//! let muppets: Sequence<Record<String>> = ["Kermit", "Piggy", "Gonzo"]
//!     .iter()
//!     .map(|name| Record::new().with_field("name", (*name).to_owned()))
//!     .collect();
//!
//! let names = try_map(get("name"), &muppets)?;
//! assert_eq!(names.len(), 3);
//! # Ok::<(), sequent::SequentError>(())
//! ```
//!
//! # Modules
//!
//! - **Pipeline**: [`Pipeline`] - chained unary transformation
//! - **Foundation**: [`Sequence`], [`Record`] - the immutable data model
//! - **Kernel**: [`map`], [`filter`], [`fold`], [`intersperse`], [`get`]

mod error;
mod pipeline;

pub use error::{Result, SequentError};
pub use pipeline::Pipeline;

// Foundation
pub use sequent_types::{FieldError, Record, Sequence};

// Kernel combinators
pub use sequent_kernel::{filter, fold, get, intersperse, map, try_filter, try_fold, try_map};

#[cfg(test)]
mod tests;

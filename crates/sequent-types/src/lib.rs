//! # sequent-types: Core types for `Sequent`
//!
//! This crate contains the data model shared across the `Sequent` workspace:
//! - Ordered collections ([`Sequence`])
//! - Named-field values ([`Record`], [`FieldError`])
//!
//! Both types are immutable by construction: there is no `&mut` surface,
//! and every "modifying" operation takes ownership (or a reference) and
//! returns a fresh value. Given the same inputs, every operation in this
//! crate returns the same output and never touches its arguments.

mod record;
mod sequence;

pub use record::{FieldError, Record};
pub use sequence::Sequence;

//! Unified error type for the Sequent surface.
//!
//! Combinators never catch or translate failures from caller-supplied
//! closures; those propagate generically. `SequentError` covers the
//! conditions the library itself raises.

use sequent_types::FieldError;
use thiserror::Error;

/// Errors raised by the Sequent library itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequentError {
    /// A record lookup named an absent field.
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Convenience alias for results with [`SequentError`].
pub type Result<T> = std::result::Result<T, SequentError>;

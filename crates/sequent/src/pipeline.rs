//! Value pipelines.
//!
//! A [`Pipeline`] threads a single value through successive unary
//! transformations. Advancing consumes the pipeline and returns a new
//! one, so a previously returned pipeline is never mutated - there is
//! nothing left to mutate once it has been advanced.

use tracing::trace;

/// A value being threaded through successive unary transformations.
///
/// # Examples
///
/// ```
/// use sequent::Pipeline;
///
/// let p = Pipeline::new(3).advance(|n| n + 4);
/// assert_eq!(*p.value(), 7);
/// ```
///
/// Chaining two advances is the same as advancing once with the
/// composition:
///
/// ```
/// use sequent::Pipeline;
///
/// let chained = Pipeline::new(5).advance(|n| n + 1).advance(|n| n * 2);
/// let composed = Pipeline::new(5).advance(|n| (n + 1) * 2);
/// assert_eq!(chained.value(), composed.value());
/// ```
#[derive(Debug, Clone)]
pub struct Pipeline<T> {
    value: T,
    steps: usize,
}

impl<T> Pipeline<T> {
    /// Wraps `value` in a fresh pipeline with no steps applied.
    pub fn new(value: T) -> Self {
        Self { value, steps: 0 }
    }

    /// Applies `f` to the wrapped value, producing a new pipeline.
    ///
    /// The current pipeline is consumed; the result is a fresh instance
    /// wrapping `f`'s output.
    pub fn advance<U, F>(self, f: F) -> Pipeline<U>
    where
        F: FnOnce(T) -> U,
    {
        let steps = self.steps + 1;
        let value = f(self.value);
        trace!(
            step = steps,
            output_type = std::any::type_name::<U>(),
            "pipeline advanced"
        );
        Pipeline { value, steps }
    }

    /// Fluent alias for [`advance`](Self::advance); identical behavior.
    pub fn then<U, F>(self, f: F) -> Pipeline<U>
    where
        F: FnOnce(T) -> U,
    {
        self.advance(f)
    }

    /// The most recently computed value.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the pipeline, returning the final value.
    pub fn into_value(self) -> T {
        self.value
    }

    /// Number of transformations applied since construction.
    pub fn steps(&self) -> usize {
        self.steps
    }
}

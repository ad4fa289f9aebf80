use super::TryTransform;
use crate::pure::Transform;

use core::any;
use core::fmt;

/// Lower a fallible transformation into a total one which panics on error.
///
/// On success the returned transformation yields the output of `f`. On
/// failure it never returns a value: it emits an error event through
/// [`tracing`] naming the failed transformation and its error, then panics,
/// unwinding (or aborting, under `panic = "abort"`) the current unit of work.
///
/// This is an escape hatch for integration points which have no error
/// channel. It is not a way to handle errors. Only call it where failure
/// cannot happen, or where failure must not be handled.
///
/// # Panics
///
/// Panics whenever `f` returns an error.
///
/// # Examples
///
/// ```
/// use fnflow::prelude::*;
/// use fnflow::{impure, pure, Error};
///
/// let inc = pure::attach::<_, Error>(|x: i32| x + 1);
/// let plus_two = impure::detach(impure::compose2(inc, inc));
///
/// assert_eq!(plus_two.apply(3), 5);
/// ```
pub fn detach<F>(f: F) -> Detach<F> {
    Detach { f }
}

/// A fallible transformation presented as a total one.
///
/// This `struct` is created by the [`detach`] function and the
/// [`detach`][crate::impure::TryTransformExt::detach] method on
/// [`TryTransformExt`][crate::impure::TryTransformExt]. See their
/// documentation for more.
#[derive(Debug, Clone, Copy)]
#[must_use = "transformations do nothing unless applied"]
pub struct Detach<F> {
    f: F,
}

impl<I, F> Transform<I> for Detach<F>
where
    F: TryTransform<I>,
    F::Error: fmt::Display,
{
    type Output = F::Output;

    #[track_caller]
    fn apply(&self, input: I) -> Self::Output {
        match self.f.try_apply(input) {
            Ok(output) => output,
            Err(err) => {
                let transformation = any::type_name::<F>();
                tracing::error!(%transformation, error = %err, "detached transformation failed");
                panic!("detached transformation `{transformation}` failed: {err}");
            }
        }
    }
}

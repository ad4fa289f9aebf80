use super::Transform;
use crate::impure::TryTransform;

use core::fmt;
use core::marker::PhantomData;

/// Lift a total transformation into the fallible shape.
///
/// The returned transformation always succeeds with `Ok(f(input))`. `E` is
/// the error type it reports, which lets it join pipelines of fallible
/// stages sharing that error type.
///
/// # Examples
///
/// ```
/// use fnflow::prelude::*;
/// use fnflow::{impure, pure};
///
/// let inc = pure::attach(|x: i32| x + 1);
/// let parse = |s: &str| s.parse::<i32>();
/// let pipeline = impure::compose2(parse, inc);
///
/// assert_eq!(pipeline.try_apply("41"), Ok(42));
/// assert!(pipeline.try_apply("forty-one").is_err());
/// ```
pub fn attach<F, E>(f: F) -> Attach<F, E> {
    Attach {
        f,
        _error: PhantomData,
    }
}

/// A total transformation presented as a fallible one.
///
/// This `struct` is created by the [`attach`] function and the
/// [`attach`][crate::pure::TransformExt::attach] method on
/// [`TransformExt`][crate::pure::TransformExt]. See their documentation for
/// more.
#[must_use = "transformations do nothing unless applied"]
pub struct Attach<F, E> {
    f: F,
    _error: PhantomData<fn() -> E>,
}

impl<I, F, E> TryTransform<I> for Attach<F, E>
where
    F: Transform<I>,
{
    type Output = F::Output;
    type Error = E;

    #[inline]
    fn try_apply(&self, input: I) -> Result<Self::Output, E> {
        Ok(self.f.apply(input))
    }
}

impl<F: Clone, E> Clone for Attach<F, E> {
    fn clone(&self) -> Self {
        attach(self.f.clone())
    }
}

impl<F: Copy, E> Copy for Attach<F, E> {}

impl<F: fmt::Debug, E> fmt::Debug for Attach<F, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Attach").field(&self.f).finish()
    }
}

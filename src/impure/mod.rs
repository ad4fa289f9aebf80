//! Fallible transformations: functions which produce an output or an error.
//!
//! Any `Fn(I) -> Result<O, E>` is a [`TryTransform`]. Composing fallible
//! transformations short-circuits: the first stage to fail ends the pipeline,
//! its error is returned, and later stages are never invoked. All stages of a
//! pipeline share one error type.
//!
//! # Examples
//!
//! ```
//! use fnflow::prelude::*;
//! use fnflow::{impure, Error};
//!
//! let parse = |s: &str| s.parse::<u8>().map_err(Error::new);
//! let halve = |x: u8| {
//!     if x % 2 == 0 {
//!         Ok(x / 2)
//!     } else {
//!         Err(Error::msg(format!("{x} is odd")))
//!     }
//! };
//!
//! let pipeline = impure::compose2(parse, halve);
//! assert_eq!(pipeline.try_apply("42").unwrap(), 21);
//! assert_eq!(pipeline.try_apply("41").unwrap_err().to_string(), "41 is odd");
//! ```
//!
//! | Operation    | Result |
//! | ---          | ---    |
//! | `compose2`   | `f1(x).and_then(f2)`
//! | `and_then`   | append one stage
//! | `detach`     | lower into a total transformation which panics on error

pub use and_then::AndThen;
pub use compose::TryCompose;
pub use detach::{detach, Detach};

mod and_then;
pub(crate) mod compose;
mod detach;

/// A single-input, single-output computation which may fail.
pub trait TryTransform<I> {
    /// The value produced on success.
    type Output;

    /// The error produced on failure.
    type Error;

    /// Apply the transformation to an input.
    fn try_apply(&self, input: I) -> Result<Self::Output, Self::Error>;
}

impl<I, O, E, F> TryTransform<I> for F
where
    F: Fn(I) -> Result<O, E>,
{
    type Output = O;
    type Error = E;

    #[inline]
    fn try_apply(&self, input: I) -> Result<O, E> {
        self(input)
    }
}

/// An extension trait for the [`TryTransform`] trait.
pub trait TryTransformExt<I>: TryTransform<I> {
    /// Append a stage, applied to the output of this transformation if it
    /// succeeds.
    fn and_then<B>(self, next: B) -> AndThen<Self, B>
    where
        Self: Sized,
        B: TryTransform<Self::Output, Error = Self::Error>,
    {
        AndThen::new(self, next)
    }

    /// Lower this transformation into a total one which panics on error.
    ///
    /// See [`detach`] for when this is, and is not, appropriate.
    fn detach(self) -> Detach<Self>
    where
        Self: Sized,
    {
        detach(self)
    }
}

impl<I, T> TryTransformExt<I> for T where T: TryTransform<I> {}

/// Compose two fallible transformations.
///
/// If `f1` fails its error is returned and `f2` is never invoked.
pub fn compose2<I, F1, F2>(f1: F1, f2: F2) -> AndThen<F1, F2>
where
    F1: TryTransform<I>,
    F2: TryTransform<F1::Output, Error = F1::Error>,
{
    AndThen::new(f1, f2)
}

/// Compose three fallible transformations, stopping at the first error.
pub fn compose3<I, F1, F2, F3>(f1: F1, f2: F2, f3: F3) -> AndThen<AndThen<F1, F2>, F3>
where
    F1: TryTransform<I>,
    F2: TryTransform<F1::Output, Error = F1::Error>,
    F3: TryTransform<F2::Output, Error = F1::Error>,
{
    compose2(compose2(f1, f2), f3)
}

/// Compose four fallible transformations, stopping at the first error.
pub fn compose4<I, F1, F2, F3, F4>(
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
) -> AndThen<AndThen<AndThen<F1, F2>, F3>, F4>
where
    F1: TryTransform<I>,
    F2: TryTransform<F1::Output, Error = F1::Error>,
    F3: TryTransform<F2::Output, Error = F1::Error>,
    F4: TryTransform<F3::Output, Error = F1::Error>,
{
    compose2(compose3(f1, f2, f3), f4)
}

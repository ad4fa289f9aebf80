//! Total transformations: functions which always produce an output.
//!
//! Any `Fn(I) -> O` is a [`Transform`]. Transformations compose into
//! pipelines which are transformations themselves, so pipelines nest.
//!
//! # Examples
//!
//! ```
//! use fnflow::prelude::*;
//! use fnflow::pure;
//!
//! let inc = |x: i32| x + 1;
//! let double = |x: i32| x * 2;
//!
//! // Fixed arity.
//! assert_eq!(pure::compose2(inc, double).apply(3), 8);
//!
//! // One stage at a time.
//! let pipeline = inc.then(double).then(|x: i32| x.to_string());
//! assert_eq!(pipeline.apply(3), "8");
//!
//! // Any tuple of up to 12 stages.
//! assert_eq!((inc, double, inc).compose().apply(3), 9);
//! ```
//!
//! | Operation    | Result          |
//! | ---          | ---             |
//! | `compose2`   | `f2(f1(x))`
//! | `compose3`   | `f3(f2(f1(x)))`
//! | `then`       | append one stage
//! | `attach`     | lift into the fallible shape

pub use attach::{attach, Attach};
pub use compose::Compose;
pub use then::Then;

use core::fmt;
use core::marker::PhantomData;

mod attach;
pub(crate) mod compose;
mod then;

/// A single-input, single-output computation which cannot fail.
pub trait Transform<I> {
    /// The value produced by the transformation.
    type Output;

    /// Apply the transformation to an input.
    fn apply(&self, input: I) -> Self::Output;
}

impl<I, O, F> Transform<I> for F
where
    F: Fn(I) -> O,
{
    type Output = O;

    #[inline]
    fn apply(&self, input: I) -> O {
        self(input)
    }
}

/// An extension trait for the [`Transform`] trait.
pub trait TransformExt<I>: Transform<I> {
    /// Append a stage, applied to the output of this transformation.
    fn then<B>(self, next: B) -> Then<Self, B>
    where
        Self: Sized,
        B: Transform<Self::Output>,
    {
        Then::new(self, next)
    }

    /// Lift this transformation into the fallible shape.
    ///
    /// The result never fails; `E` is the error type it claims to have, and is
    /// usually inferred from the pipeline it joins.
    fn attach<E>(self) -> Attach<Self, E>
    where
        Self: Sized,
    {
        attach(self)
    }
}

impl<I, T> TransformExt<I> for T where T: Transform<I> {}

/// Compose two transformations: `f2(f1(x))`.
pub fn compose2<I, F1, F2>(f1: F1, f2: F2) -> Then<F1, F2>
where
    F1: Transform<I>,
    F2: Transform<F1::Output>,
{
    Then::new(f1, f2)
}

/// Compose three transformations: `f3(f2(f1(x)))`.
pub fn compose3<I, F1, F2, F3>(f1: F1, f2: F2, f3: F3) -> Then<Then<F1, F2>, F3>
where
    F1: Transform<I>,
    F2: Transform<F1::Output>,
    F3: Transform<F2::Output>,
{
    compose2(compose2(f1, f2), f3)
}

/// Compose four transformations: `f4(f3(f2(f1(x))))`.
pub fn compose4<I, F1, F2, F3, F4>(
    f1: F1,
    f2: F2,
    f3: F3,
    f4: F4,
) -> Then<Then<Then<F1, F2>, F3>, F4>
where
    F1: Transform<I>,
    F2: Transform<F1::Output>,
    F3: Transform<F2::Output>,
    F4: Transform<F3::Output>,
{
    compose2(compose3(f1, f2, f3), f4)
}

/// The transformation which returns its input unchanged.
///
/// This is the unit of composition: composing it before or after any stage
/// leaves that stage's behavior unchanged.
pub fn identity<T>() -> Identity<T> {
    Identity(PhantomData)
}

/// Returns its input unchanged.
///
/// This `struct` is created by the [`identity`] function.
pub struct Identity<T>(PhantomData<fn(T) -> T>);

impl<T> Transform<T> for Identity<T> {
    type Output = T;

    #[inline]
    fn apply(&self, input: T) -> T {
        input
    }
}

impl<T> Clone for Identity<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Identity<T> {}

impl<T> fmt::Debug for Identity<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Identity")
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn inc(x: i32) -> i32 {
        x + 1
    }

    #[test]
    fn compose_fixed_arity() {
        assert_eq!(compose2(inc, inc).apply(0), 2);
        assert_eq!(compose3(inc, |x: i32| x * 10, inc).apply(0), 11);
        assert_eq!(compose4(inc, inc, inc, |x: i32| x * 2).apply(1), 8);
    }

    #[test]
    fn types_change_between_stages() {
        let even_len = compose3(
            |s: String| s.trim().to_owned(),
            |s: String| s.len(),
            |n: usize| n % 2 == 0,
        );
        assert!(even_len.apply("  ab ".to_owned()));
        assert!(!even_len.apply("abc".to_owned()));
    }

    #[test]
    fn identity_is_unit() {
        let left = identity::<i32>().then(inc);
        let right = inc.then(identity::<i32>());
        assert_eq!(left.apply(4), inc(4));
        assert_eq!(right.apply(4), inc(4));
    }

    #[test]
    fn pipelines_nest() {
        let add_two = compose2(inc, inc);
        let add_four = compose2(add_two, add_two);
        assert_eq!(add_four.apply(0), 4);
    }
}

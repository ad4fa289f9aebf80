use super::TryTransform;

/// Applies one fallible transformation, then another to its output if the
/// first succeeded.
///
/// This `struct` is created by [`compose2`] and the [`and_then`] method on the
/// [`TryTransformExt`] trait. See their documentation for more.
///
/// [`compose2`]: crate::impure::compose2
/// [`and_then`]: crate::impure::TryTransformExt::and_then
/// [`TryTransformExt`]: crate::impure::TryTransformExt
#[derive(Debug, Clone, Copy)]
#[must_use = "transformations do nothing unless applied"]
pub struct AndThen<A, B> {
    first: A,
    second: B,
}

impl<A, B> AndThen<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<I, A, B> TryTransform<I> for AndThen<A, B>
where
    A: TryTransform<I>,
    B: TryTransform<A::Output, Error = A::Error>,
{
    type Output = B::Output;
    type Error = A::Error;

    #[inline]
    fn try_apply(&self, input: I) -> Result<Self::Output, Self::Error> {
        let output = self.first.try_apply(input)?;
        self.second.try_apply(output)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::impure::TryTransformExt;

    fn non_zero(x: i32) -> Result<i32, &'static str> {
        if x == 0 {
            Err("zero")
        } else {
            Ok(x)
        }
    }

    fn reciprocal(x: i32) -> Result<f64, &'static str> {
        non_zero(x).map(|x| 1.0 / f64::from(x))
    }

    #[test]
    fn short_circuits() {
        let pipeline = non_zero.and_then(reciprocal);
        assert_eq!(pipeline.try_apply(4), Ok(0.25));
        assert_eq!(pipeline.try_apply(0), Err("zero"));
    }

    #[test]
    fn associative() {
        let dec = |x: i32| Ok::<_, &'static str>(x - 1);
        for x in -3..3 {
            let left = non_zero.and_then(dec).and_then(non_zero).try_apply(x);
            let right = non_zero.and_then(dec.and_then(non_zero)).try_apply(x);
            assert_eq!(left, right);
        }
    }
}

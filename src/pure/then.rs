use super::Transform;

/// Applies one transformation, then another to its output.
///
/// This `struct` is created by [`compose2`] and the [`then`] method on the
/// [`TransformExt`] trait. See their documentation for more.
///
/// [`compose2`]: crate::pure::compose2
/// [`then`]: crate::pure::TransformExt::then
/// [`TransformExt`]: crate::pure::TransformExt
#[derive(Debug, Clone, Copy)]
#[must_use = "transformations do nothing unless applied"]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<I, A, B> Transform<I> for Then<A, B>
where
    A: Transform<I>,
    B: Transform<A::Output>,
{
    type Output = B::Output;

    #[inline]
    fn apply(&self, input: I) -> Self::Output {
        self.second.apply(self.first.apply(input))
    }
}

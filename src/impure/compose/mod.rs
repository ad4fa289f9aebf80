use super::TryTransform;

pub(crate) mod tuple;

/// Compose a sequence of fallible transformations into a single pipeline.
///
/// Implemented for tuples of 1 to 12 stages sharing one error type. The
/// pipeline stops at the first stage which fails. It is built by repeated
/// pairwise composition from the left, so `(f, g, h).try_compose()` is
/// `compose2(compose2(f, g), h)`.
pub trait TryCompose<I> {
    /// The output of the final stage.
    type Output;

    /// The error shared by every stage.
    type Error;

    /// The composed pipeline.
    type Transform: TryTransform<I, Output = Self::Output, Error = Self::Error>;

    /// Compose the stages, in order, into one transformation.
    fn try_compose(self) -> Self::Transform;
}

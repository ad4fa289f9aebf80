use super::Transform;

pub(crate) mod tuple;

/// Compose a sequence of transformations into a single pipeline.
///
/// Implemented for tuples of 1 to 12 stages. The output of each stage must be
/// the input of the next. The pipeline is built by repeated pairwise
/// composition from the left, so `(f, g, h).compose()` is
/// `compose2(compose2(f, g), h)`.
pub trait Compose<I> {
    /// The output of the final stage.
    type Output;

    /// The composed pipeline.
    type Transform: Transform<I, Output = Self::Output>;

    /// Compose the stages, in order, into one transformation.
    fn compose(self) -> Self::Transform;
}

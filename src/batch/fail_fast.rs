use super::Partial;
use crate::impure::TryTransform;

/// Apply `f` to each input in order, stopping at the first error.
///
/// Returns the outputs produced before the first failure alongside that
/// failure. Inputs after the one which failed are never passed to `f`.
///
/// # Examples
///
/// ```
/// use fnflow::batch::map_fail_fast;
///
/// let parse = |s: &str| s.parse::<u8>();
///
/// let partial = map_fail_fast(parse, ["1", "2", "x", "4"]);
/// assert_eq!(partial.outputs, [1, 2]);
/// assert!(partial.error.is_some());
///
/// assert_eq!(map_fail_fast(parse, ["1", "2"]).into_result(), Ok(vec![1, 2]));
/// ```
pub fn map_fail_fast<I, F, T>(f: F, inputs: T) -> Partial<F::Output, F::Error>
where
    F: TryTransform<I>,
    T: IntoIterator<Item = I>,
{
    let inputs = inputs.into_iter();
    let mut outputs = Vec::with_capacity(inputs.size_hint().0);

    for (index, input) in inputs.enumerate() {
        match f.try_apply(input) {
            Ok(output) => outputs.push(output),
            Err(err) => {
                tracing::debug!(index, completed = outputs.len(), "batch stopped at first error");
                return Partial {
                    outputs,
                    error: Some(err),
                };
            }
        }
    }

    tracing::debug!(completed = outputs.len(), "batch completed");
    Partial {
        outputs,
        error: None,
    }
}

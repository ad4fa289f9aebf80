use super::Batch;
use crate::impure::TryTransform;

/// Apply `f` to every input in order, collecting successes and failures.
///
/// Every input is processed, whatever happened to the ones before it. `f`
/// receives a clone of each input so that inputs which fail can be handed
/// back in the [`Batch`] for inspection or retry.
///
/// # Examples
///
/// ```
/// use fnflow::batch::map_collect_all;
///
/// let parse = |s: &str| s.parse::<u8>();
///
/// let batch = map_collect_all(parse, ["1", "x", "3", "y"]);
/// assert_eq!(batch.outputs, [1, 3]);
/// assert_eq!(batch.failed_inputs, ["x", "y"]);
/// assert_eq!(batch.errors.len(), 2);
/// ```
pub fn map_collect_all<I, F, T>(f: F, inputs: T) -> Batch<I, F::Output, F::Error>
where
    I: Clone,
    F: TryTransform<I>,
    T: IntoIterator<Item = I>,
{
    let inputs = inputs.into_iter();
    let mut batch = Batch::with_capacity(inputs.size_hint().0);

    for (index, input) in inputs.enumerate() {
        let result = f.try_apply(input.clone());
        if result.is_err() {
            tracing::trace!(index, "batch item failed");
        }
        batch.record(input, result);
    }

    tracing::debug!(
        inputs = batch.len(),
        failed = batch.errors.len(),
        "batch collected"
    );
    batch
}

#[cfg(test)]
mod test {
    use super::*;

    use std::cell::Cell;

    fn odd_only(x: u32) -> Result<u32, String> {
        if x % 2 == 0 {
            Err(format!("{x} is even"))
        } else {
            Ok(x * 10)
        }
    }

    #[test]
    fn keeps_going_after_errors() {
        let batch = map_collect_all(odd_only, [1, 2, 3, 4]);
        assert_eq!(batch.outputs, [10, 30]);
        assert_eq!(batch.failed_inputs, [2, 4]);
        assert_eq!(batch.errors, ["2 is even", "4 is even"]);
    }

    #[test]
    fn every_input_is_attempted() {
        let calls = Cell::new(0);
        let f = |x: u32| {
            calls.set(calls.get() + 1);
            Err::<u32, _>(x)
        };
        let batch = map_collect_all(f, 0..5);
        assert_eq!(calls.get(), 5);
        assert_eq!(batch.failed_inputs, batch.errors);
        assert!(batch.outputs.is_empty());
    }

    #[test]
    fn empty() {
        let batch = map_collect_all(odd_only, []);
        assert!(batch.is_empty());
        assert!(batch.errors.is_empty());
    }
}

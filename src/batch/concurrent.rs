use super::Batch;
use crate::impure::TryTransform;
use crate::utils::Slots;

use std::panic;
use std::thread;

/// Apply `f` to every input concurrently, collecting successes and failures.
///
/// Each input runs on its own scoped thread. Every thread owns exactly one
/// pre-allocated result slot, addressed by the input's position, so no two
/// threads ever write to the same place. The call returns only once every
/// thread has finished, and the returned [`Batch`] lists outputs and failures
/// in input order, exactly as [`map_collect_all`][super::map_collect_all]
/// would, whatever order the threads completed in.
///
/// `f` receives a clone of each input so that inputs which fail can be handed
/// back in the batch.
///
/// # Panics
///
/// If `f` panics for any input, the panic is resumed on the calling thread
/// once every thread has been joined. When several inputs panic, the first
/// in input order wins.
///
/// # Examples
///
/// ```
/// use fnflow::batch::map_collect_all_concurrent;
/// use std::{thread, time::Duration};
///
/// let slow_parse = |s: &str| {
///     // Later inputs finish first.
///     thread::sleep(Duration::from_millis(30 - 10 * s.len() as u64));
///     s.parse::<u32>()
/// };
///
/// let batch = map_collect_all_concurrent(slow_parse, ["1", "22", "xx"]);
/// assert_eq!(batch.outputs, [1, 22]);
/// assert_eq!(batch.failed_inputs, ["xx"]);
/// ```
pub fn map_collect_all_concurrent<I, F, T>(f: F, inputs: T) -> Batch<I, F::Output, F::Error>
where
    I: Clone + Send,
    F: TryTransform<I> + Sync,
    F::Output: Send,
    F::Error: Send,
    T: IntoIterator<Item = I>,
{
    let inputs: Vec<I> = inputs.into_iter().collect();
    let mut slots = Slots::new(inputs.len());

    let f = &f;
    let panicked = thread::scope(|scope| {
        let handles: Vec<_> = slots
            .iter_mut()
            .zip(inputs.iter().cloned())
            .map(|(slot, input)| {
                scope.spawn(move || {
                    *slot = Some(f.try_apply(input));
                })
            })
            .collect();

        // Join every thread before looking at any of them, keeping the first
        // panic in input order.
        handles
            .into_iter()
            .map(thread::ScopedJoinHandle::join)
            .fold(None, |first, joined| first.or(joined.err()))
    });
    if let Some(payload) = panicked {
        panic::resume_unwind(payload);
    }

    let Some(results) = slots.take() else {
        unreachable!("every thread writes its slot before the scope joins");
    };

    let mut batch = Batch::with_capacity(inputs.len());
    for (index, (input, result)) in inputs.into_iter().zip(results).enumerate() {
        if result.is_err() {
            tracing::trace!(index, "batch item failed");
        }
        batch.record(input, result);
    }

    tracing::debug!(
        inputs = batch.len(),
        failed = batch.errors.len(),
        "concurrent batch collected"
    );
    batch
}

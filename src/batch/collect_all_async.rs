use super::Batch;
use crate::utils::{iter_pin_mut_vec, PollVec, Slots};

use core::fmt;
use core::future::Future;
use core::pin::Pin;
use core::task::{Context, Poll};
use std::mem;

use pin_project::pin_project;

/// Apply an asynchronous, fallible `f` to every input concurrently,
/// collecting successes and failures.
///
/// One future is created per input. The returned future polls all of them
/// concurrently on the current task, writes each result into the slot
/// reserved for its input's position, and resolves to a [`Batch`] in input
/// order once every future has completed. Dropping it drops every future
/// still in flight.
///
/// `f` receives a clone of each input so that inputs which fail can be handed
/// back in the batch.
///
/// # Examples
///
/// ```
/// use fnflow::batch::map_collect_all_async;
/// use futures_lite::future::block_on;
///
/// block_on(async {
///     let parse = |s: &'static str| async move { s.parse::<u8>() };
///
///     let batch = map_collect_all_async(parse, ["1", "x", "3"]).await;
///     assert_eq!(batch.outputs, [1, 3]);
///     assert_eq!(batch.failed_inputs, ["x"]);
/// })
/// ```
pub fn map_collect_all_async<I, F, Fut, T, O, E>(f: F, inputs: T) -> CollectAll<I, Fut>
where
    I: Clone,
    F: Fn(I) -> Fut,
    Fut: Future<Output = Result<O, E>>,
    T: IntoIterator<Item = I>,
{
    let inputs: Vec<I> = inputs.into_iter().collect();
    let futures = inputs.iter().cloned().map(f).collect();
    CollectAll::new(inputs, futures)
}

/// Waits for one future per input to complete, collecting their results in
/// input order.
///
/// This `struct` is created by the [`map_collect_all_async`] function. See
/// its documentation for more.
#[must_use = "futures do nothing unless you `.await` or poll them"]
#[pin_project]
pub struct CollectAll<I, Fut>
where
    Fut: Future,
{
    consumed: bool,
    pending: usize,
    inputs: Vec<I>,
    slots: Slots<Fut::Output>,
    state: PollVec,
    #[pin]
    futures: Vec<Fut>,
}

impl<I, Fut> CollectAll<I, Fut>
where
    Fut: Future,
{
    pub(crate) fn new(inputs: Vec<I>, futures: Vec<Fut>) -> Self {
        debug_assert_eq!(inputs.len(), futures.len());
        CollectAll {
            consumed: false,
            pending: futures.len(),
            inputs,
            slots: Slots::new(futures.len()),
            state: PollVec::new(futures.len()),
            futures,
        }
    }
}

impl<I, Fut> fmt::Debug for CollectAll<I, Fut>
where
    Fut: Future,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.state.iter()).finish()
    }
}

impl<I, Fut, O, E> Future for CollectAll<I, Fut>
where
    Fut: Future<Output = Result<O, E>>,
{
    type Output = Batch<I, O, E>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let mut this = self.project();

        assert!(
            !*this.consumed,
            "Futures must not be polled after completing"
        );

        // Poll every future which has not completed yet
        let states = &mut this.state[..];
        for (i, fut) in iter_pin_mut_vec(this.futures.as_mut()).enumerate() {
            if states[i].is_pending() {
                if let Poll::Ready(result) = fut.poll(cx) {
                    this.slots.write(i, result);
                    states[i].set_ready();
                    *this.pending -= 1;
                }
            }
        }

        if *this.pending > 0 {
            return Poll::Pending;
        }

        // Mark all results as "consumed" before we take them
        *this.consumed = true;
        debug_assert_eq!(this.state.pending(), 0);
        this.state.iter_mut().for_each(|state| {
            debug_assert!(state.is_ready(), "Future should have reached a `Ready` state");
            state.set_consumed();
        });

        let Some(results) = this.slots.take() else {
            unreachable!("every future writes its slot before completing");
        };

        let inputs = mem::take(this.inputs);
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
            "async batch collected"
        );
        Poll::Ready(batch)
    }
}

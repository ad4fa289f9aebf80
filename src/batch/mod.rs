//! Apply a fallible transformation to every item of a sequence.
//!
//! Each input is processed independently. The policies differ in what they
//! do when a transformation fails, and whether items run concurrently:
//!
//! | Name                         | Return signature  | What happens on error?            | Concurrency |
//! | ---                          | ---               | ---                               | ---         |
//! | `map_fail_fast`              | `Partial<O, E>`   | Stop, keep the outputs so far     | none
//! | `map_collect_all`            | `Batch<I, O, E>`  | Record the input and error, go on | none
//! | `map_collect_all_concurrent` | `Batch<I, O, E>`  | Record the input and error, go on | one thread per input
//! | `map_collect_all_async`      | `Batch<I, O, E>`  | Record the input and error, go on | one future per input
//!
//! Every `Batch` lists outputs, failed inputs, and errors in input order,
//! whatever order the items completed in.
//!
//! # Examples
//!
//! ```
//! use fnflow::batch;
//!
//! let halve = |x: u32| if x % 2 == 0 { Ok(x / 2) } else { Err(format!("{x} is odd")) };
//!
//! let partial = batch::map_fail_fast(halve, [2, 4, 5, 6]);
//! assert_eq!(partial.outputs, [1, 2]);
//! assert_eq!(partial.error.as_deref(), Some("5 is odd"));
//!
//! let all = batch::map_collect_all(halve, [2, 4, 5, 6, 7]);
//! assert_eq!(all.outputs, [1, 2, 3]);
//! assert_eq!(all.failed_inputs, [5, 7]);
//! assert_eq!(all.errors.len(), 2);
//!
//! let concurrent = batch::map_collect_all_concurrent(halve, [2, 4, 5, 6, 7]);
//! assert_eq!(concurrent, all);
//! ```

pub use collect_all::map_collect_all;
#[cfg(feature = "async")]
pub use collect_all_async::{map_collect_all_async, CollectAll};
pub use concurrent::map_collect_all_concurrent;
pub use error::AggregateError;
pub use fail_fast::map_fail_fast;

use crate::impure::TryTransform;

use core::fmt;

mod collect_all;
#[cfg(feature = "async")]
mod collect_all_async;
mod concurrent;
mod error;
mod fail_fast;

/// The result of mapping with a collect-all policy.
///
/// `outputs` holds every successful output. `failed_inputs` and `errors` are
/// index-aligned: `errors[n]` is what the transformation returned for
/// `failed_inputs[n]`. All three are in input order, and together they
/// account for every input exactly once.
#[derive(Clone, PartialEq, Eq)]
pub struct Batch<I, O, E> {
    /// The outputs of every input which succeeded.
    pub outputs: Vec<O>,
    /// The inputs which failed.
    pub failed_inputs: Vec<I>,
    /// One error per failed input.
    pub errors: Vec<E>,
}

impl<I, O, E> Batch<I, O, E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            outputs: Vec::with_capacity(capacity),
            failed_inputs: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Record the result of transforming one input.
    pub(crate) fn record(&mut self, input: I, result: Result<O, E>) {
        match result {
            Ok(output) => self.outputs.push(output),
            Err(err) => {
                self.failed_inputs.push(input);
                self.errors.push(err);
            }
        }
    }

    /// The number of inputs accounted for, successful or not.
    pub fn len(&self) -> usize {
        self.outputs.len() + self.failed_inputs.len()
    }

    /// Returns `true` if the batch was built from no inputs.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if every input succeeded.
    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterate over each failed input alongside its error.
    pub fn failures(&self) -> impl Iterator<Item = (&I, &E)> + '_ {
        self.failed_inputs.iter().zip(self.errors.iter())
    }

    /// Returns the outputs if every input succeeded, or all of the errors
    /// otherwise.
    pub fn into_result(self) -> Result<Vec<O>, AggregateError<E>> {
        if self.errors.is_empty() {
            Ok(self.outputs)
        } else {
            Err(AggregateError::new(self.errors))
        }
    }
}

impl<I, O, E> Default for Batch<I, O, E> {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<I, O, E> fmt::Debug for Batch<I, O, E>
where
    I: fmt::Debug,
    O: fmt::Debug,
    E: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Batch")
            .field("outputs", &self.outputs)
            .field("failed_inputs", &self.failed_inputs)
            .field("errors", &self.errors)
            .finish()
    }
}

/// The result of mapping with the fail-fast policy.
///
/// `outputs` holds the outputs of every input before the first failure, in
/// input order. `error` is the first failure, if there was one; inputs after
/// it were never processed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partial<O, E> {
    /// The outputs produced before the first error.
    pub outputs: Vec<O>,
    /// The first error, if any.
    pub error: Option<E>,
}

impl<O, E> Partial<O, E> {
    /// Returns `true` if every input succeeded.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Returns the outputs if every input succeeded, or the first error,
    /// discarding the partial outputs.
    pub fn into_result(self) -> Result<Vec<O>, E> {
        match self.error {
            None => Ok(self.outputs),
            Some(err) => Err(err),
        }
    }
}

/// Batch mapping as methods on `Vec`.
///
/// # Examples
///
/// ```
/// use fnflow::prelude::*;
///
/// let parse = |s: &str| s.parse::<i32>();
/// let batch = vec!["1", "two", "3"].try_map_collect_all(parse);
///
/// assert_eq!(batch.outputs, [1, 3]);
/// assert_eq!(batch.failed_inputs, ["two"]);
/// ```
pub trait BatchExt<I> {
    /// Apply `f` to each item in order, stopping at the first error.
    ///
    /// See [`map_fail_fast`].
    fn try_map_fail_fast<F>(self, f: F) -> Partial<F::Output, F::Error>
    where
        F: TryTransform<I>;

    /// Apply `f` to every item in order, collecting successes and failures.
    ///
    /// See [`map_collect_all`].
    fn try_map_collect_all<F>(self, f: F) -> Batch<I, F::Output, F::Error>
    where
        I: Clone,
        F: TryTransform<I>;

    /// Apply `f` to every item concurrently, collecting successes and
    /// failures in input order.
    ///
    /// See [`map_collect_all_concurrent`].
    fn try_map_collect_all_concurrent<F>(self, f: F) -> Batch<I, F::Output, F::Error>
    where
        I: Clone + Send,
        F: TryTransform<I> + Sync,
        F::Output: Send,
        F::Error: Send;
}

impl<I> BatchExt<I> for Vec<I> {
    fn try_map_fail_fast<F>(self, f: F) -> Partial<F::Output, F::Error>
    where
        F: TryTransform<I>,
    {
        map_fail_fast(f, self)
    }

    fn try_map_collect_all<F>(self, f: F) -> Batch<I, F::Output, F::Error>
    where
        I: Clone,
        F: TryTransform<I>,
    {
        map_collect_all(f, self)
    }

    fn try_map_collect_all_concurrent<F>(self, f: F) -> Batch<I, F::Output, F::Error>
    where
        I: Clone + Send,
        F: TryTransform<I> + Sync,
        F::Output: Send,
        F::Error: Send,
    {
        map_collect_all_concurrent(f, self)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn batch() -> Batch<u8, u8, &'static str> {
        let mut batch = Batch::default();
        batch.record(1, Ok(10));
        batch.record(2, Err("two"));
        batch.record(3, Ok(30));
        batch.record(4, Err("four"));
        batch
    }

    #[test]
    fn record_keeps_failures_aligned() {
        let batch = batch();
        assert_eq!(batch.len(), 4);
        assert!(!batch.is_complete());
        assert_eq!(
            batch.failures().collect::<Vec<_>>(),
            vec![(&2, &"two"), (&4, &"four")]
        );
    }

    #[test]
    fn into_result() {
        let err = batch().into_result().unwrap_err();
        assert_eq!(*err, vec!["two", "four"]);

        let mut ok = Batch::<u8, u8, &'static str>::default();
        ok.record(1, Ok(1));
        assert_eq!(ok.into_result(), Ok(vec![1]));
    }

    #[test]
    fn partial_into_result() {
        let partial = Partial {
            outputs: vec![1],
            error: Some("boom"),
        };
        assert!(!partial.is_complete());
        assert_eq!(partial.into_result(), Err("boom"));
    }

    #[test]
    fn empty() {
        let batch = Batch::<(), (), ()>::default();
        assert!(batch.is_empty());
        assert!(batch.is_complete());
    }
}

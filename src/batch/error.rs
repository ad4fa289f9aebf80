use core::fmt;
use core::ops::{Deref, DerefMut};
use std::error::Error;

/// The errors of every input which failed in a collect-all batch, in input
/// order.
///
/// This `struct` is created by [`Batch::into_result`][super::Batch::into_result].
#[derive(Clone, PartialEq, Eq)]
#[repr(transparent)]
pub struct AggregateError<E> {
    pub(crate) inner: Vec<E>,
}

impl<E> AggregateError<E> {
    pub(crate) fn new(inner: Vec<E>) -> Self {
        Self { inner }
    }

    /// Take the errors out of the aggregate.
    pub fn into_inner(self) -> Vec<E> {
        self.inner
    }
}

impl<E: fmt::Display> fmt::Debug for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{self}:")?;

        for (i, err) in self.inner.iter().enumerate() {
            writeln!(f, "- failure {}: {err}", i + 1)?;
        }

        Ok(())
    }
}

impl<E: fmt::Display> fmt::Display for AggregateError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.len() {
            1 => f.write_str("1 input failed"),
            n => write!(f, "{n} inputs failed"),
        }
    }
}

impl<E> Deref for AggregateError<E> {
    type Target = Vec<E>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<E> DerefMut for AggregateError<E> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl<E: Error> Error for AggregateError<E> {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        let err = AggregateError::new(vec!["first", "second"]);
        assert_eq!(err.to_string(), "2 inputs failed");
        assert_eq!(
            format!("{err:?}"),
            "2 inputs failed:\n- failure 1: first\n- failure 2: second\n"
        );
        assert_eq!(AggregateError::new(vec!["only"]).to_string(), "1 input failed");
    }
}

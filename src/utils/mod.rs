//! Utilities to implement the batch policies of this crate.

#[cfg(all(test, feature = "async"))]
mod dummy_waker;
#[cfg(feature = "async")]
mod pin;
#[cfg(feature = "async")]
mod poll_state;
mod slots;

#[cfg(all(test, feature = "async"))]
pub(crate) use dummy_waker::DummyWaker;
#[cfg(feature = "async")]
pub(crate) use pin::iter_pin_mut_vec;
#[cfg(feature = "async")]
pub(crate) use poll_state::PollVec;
pub(crate) use slots::Slots;

use core::ops::{Deref, DerefMut};

/// Where a single item of a concurrent batch is in its lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum PollState {
    /// The item is still being computed.
    #[default]
    Pending,
    /// The item's result has been written to its slot and it must no longer
    /// be polled.
    Ready,
    /// The item's result has been taken out of its slot.
    Consumed,
}

impl PollState {
    /// Returns `true` if the poll state is [`Pending`][Self::Pending].
    #[must_use]
    #[inline]
    pub(crate) fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Returns `true` if the poll state is [`Ready`][Self::Ready].
    #[must_use]
    #[inline]
    pub(crate) fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Sets the poll state to [`Ready`][Self::Ready].
    #[inline]
    pub(crate) fn set_ready(&mut self) {
        *self = PollState::Ready;
    }

    /// Sets the poll state to [`Consumed`][Self::Consumed].
    #[inline]
    pub(crate) fn set_consumed(&mut self) {
        *self = PollState::Consumed;
    }
}

/// One [`PollState`] per item, addressed by input index.
pub(crate) struct PollVec(Box<[PollState]>);

impl PollVec {
    pub(crate) fn new(len: usize) -> Self {
        Self(vec![PollState::Pending; len].into_boxed_slice())
    }

    /// The number of items which are still pending.
    pub(crate) fn pending(&self) -> usize {
        self.iter().filter(|state| state.is_pending()).count()
    }
}

impl Deref for PollVec {
    type Target = [PollState];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for PollVec {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Pre-sized, index-addressed storage for the results of a batch.
///
/// Each slot is written at most once, by whoever owns the item at that index.
/// Because slots are addressed by input position rather than appended on
/// completion, the order of the results never depends on the order in which
/// items finished.
#[derive(Debug)]
pub(crate) struct Slots<T> {
    items: Vec<Option<T>>,
}

impl<T> Slots<T> {
    /// Create `len` empty slots.
    pub(crate) fn new(len: usize) -> Self {
        Self {
            items: std::iter::repeat_with(|| None).take(len).collect(),
        }
    }

    /// Write the value for the item at `index`.
    #[cfg_attr(not(feature = "async"), allow(dead_code))]
    pub(crate) fn write(&mut self, index: usize, value: T) {
        debug_assert!(self.items[index].is_none(), "slot {index} written twice");
        self.items[index] = Some(value);
    }

    /// Borrow every slot mutably, so each can be handed to the one task which
    /// owns it.
    pub(crate) fn iter_mut(&mut self) -> std::slice::IterMut<'_, Option<T>> {
        self.items.iter_mut()
    }

    /// Take the values out of every slot, in index order.
    ///
    /// Returns `None` if any slot was never written.
    pub(crate) fn take(&mut self) -> Option<Vec<T>> {
        std::mem::take(&mut self.items).into_iter().collect()
    }
}

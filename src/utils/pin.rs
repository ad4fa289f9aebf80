use core::pin::Pin;

/// Project a pinned `Vec` into pinned references to each of its elements.
pub(crate) fn iter_pin_mut_vec<T>(vec: Pin<&mut Vec<T>>) -> impl Iterator<Item = Pin<&mut T>> {
    // SAFETY: the elements of a pinned `Vec` are never moved out of it: we
    // only hand out pinned references, and never push, remove or reallocate.
    // This has the same safety as a normal field pin projection.
    unsafe { vec.get_unchecked_mut() }
        .iter_mut()
        .map(|t| unsafe { Pin::new_unchecked(t) })
}

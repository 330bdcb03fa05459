use core::iter::FusedIterator;

use alloc::vec;

/// This struct is created by [`ClampedVec::drain`](crate::ClampedVec::drain).
/// See its documentation for more.
pub struct Drain<'a, T> {
    inner: vec::Drain<'a, T>,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(inner: vec::Drain<'a, T>) -> Self { Self { inner } }

    /// Get a slice of the remaining elements in the iterator
    pub fn as_slice(&self) -> &[T] { self.inner.as_slice() }
}

impl<T> FusedIterator for Drain<'_, T> {}

impl<T> ExactSizeIterator for Drain<'_, T> {}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> { self.inner.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<T> DoubleEndedIterator for Drain<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> { self.inner.next_back() }
}

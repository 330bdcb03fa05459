use core::iter::FusedIterator;

use alloc::vec;

/// This struct is created by [`ClampedVec::splice_with`](crate::ClampedVec::splice_with).
/// See its documentation for more.
pub struct Splice<'a, I: Iterator + 'a> {
    inner: vec::Splice<'a, I>,
}

impl<'a, I: Iterator + 'a> Splice<'a, I> {
    pub(crate) fn new(inner: vec::Splice<'a, I>) -> Self { Self { inner } }
}

impl<I: Iterator> FusedIterator for Splice<'_, I> {}

impl<I: Iterator> ExactSizeIterator for Splice<'_, I> {}

impl<I: Iterator> Iterator for Splice<'_, I> {
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> { self.inner.next() }

    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<I: Iterator> DoubleEndedIterator for Splice<'_, I> {
    fn next_back(&mut self) -> Option<Self::Item> { self.inner.next_back() }
}

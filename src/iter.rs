//! The [`Iterator`] types that can be created from a [`ClampedVec`]

mod drain;
mod into_iter;
mod splice;

pub use drain::Drain;
pub use into_iter::IntoIter;
pub use splice::Splice;

use core::iter::FromIterator;

use crate::ClampedVec;

use alloc::vec::Vec;

impl<T> FromIterator<T> for ClampedVec<T> {
    #[inline]
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self { Self::from_vec(Vec::from_iter(iter)) }
}

impl<T> Extend<T> for ClampedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) { self.inner.extend(iter); }
}

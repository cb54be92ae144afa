use crate::{Id, Idx};
use core::{iter::Enumerate, marker::PhantomData, slice};

pub struct Iter<'a, K: Id, V> {
    pub(crate) iter: Enumerate<slice::Iter<'a, V>>,
    pub(crate) phantom: PhantomData<K>,
}

impl<'a, K: Id, V> Iterator for Iter<'a, K, V> {
    type Item = (Idx<K, V>, &'a V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.iter
            .next()
            .map(|(i, value)| (Idx::from_raw(K::from_usize(i)), value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<K: Id, V> ExactSizeIterator for Iter<'_, K, V> {}

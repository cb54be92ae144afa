use crate::{Id, Idx, iter::Iter};
use alloc::vec::Vec;
use core::{
    fmt,
    marker::PhantomData,
    ops::{Index, IndexMut},
};

/// An index-based arena.
///
/// Values are never removed individually. They are dropped together with the
/// arena, which matches how a metamodel is torn down after a generator run.
///
/// # Examples
///
/// ```
/// use arena::{Arena, Idx, new_id_with_niche};
///
/// new_id_with_niche!(ClassId, u32);
///
/// let mut classes = Arena::<ClassId, &str>::new();
/// let widget: Idx<ClassId, &str> = classes.alloc("Widget");
/// let button = classes.alloc("Button");
///
/// assert_eq!(classes[widget], "Widget");
/// assert_eq!(classes[button], "Button");
/// assert_eq!(classes.len(), 2);
/// ```
pub struct Arena<K: Id, V> {
    data: Vec<V>,
    phantom: PhantomData<K>,
}

impl<K: Id, V> Arena<K, V> {
    #[inline]
    pub const fn new() -> Self {
        Self {
            data: Vec::new(),
            phantom: PhantomData,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Allocates a value in the arena and returns its index.
    ///
    /// # Panics
    ///
    /// Panics if the arena is full (i.e. if the number of elements exceeds `K::MAX`).
    #[inline]
    pub fn alloc(&mut self, value: V) -> Idx<K, V> {
        assert!(self.data.len() < K::MAX, "arena is full");

        let raw = K::from_usize(self.data.len());
        self.data.push(value);
        Idx::from_raw(raw)
    }

    #[inline]
    pub fn get(&self, idx: Idx<K, V>) -> Option<&V> {
        self.data.get(idx.raw.into_usize())
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            iter: self.data.iter().enumerate(),
            phantom: PhantomData,
        }
    }

    /// Returns every index currently allocated, in allocation order.
    ///
    /// The iterator does not borrow the arena, so it can be collected and
    /// walked while the arena grows.
    #[inline]
    pub fn keys(&self) -> impl Iterator<Item = Idx<K, V>> + use<K, V> {
        (0..self.data.len()).map(|i| Idx::from_raw(K::from_usize(i)))
    }

    #[inline]
    pub fn values(&self) -> core::slice::Iter<'_, V> {
        self.data.iter()
    }
}

impl<K: Id, V: Default> Arena<K, V> {
    /// Grows the arena with default values until `index` is valid.
    #[inline]
    pub fn grow_to_fit(&mut self, index: K) -> Idx<K, V> {
        let needed = index.into_usize() + 1;

        if self.data.len() < needed {
            self.data.resize_with(needed, V::default);
        }

        Idx::from_raw(index)
    }
}

impl<K: Id, V> Default for Arena<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Id, V> Index<Idx<K, V>> for Arena<K, V> {
    type Output = V;

    #[inline]
    fn index(&self, idx: Idx<K, V>) -> &Self::Output {
        &self.data[idx.raw.into_usize()]
    }
}

impl<K: Id, V> IndexMut<Idx<K, V>> for Arena<K, V> {
    #[inline]
    fn index_mut(&mut self, idx: Idx<K, V>) -> &mut Self::Output {
        &mut self.data[idx.raw.into_usize()]
    }
}

impl<K: Id, V: Clone> Clone for Arena<K, V> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            phantom: PhantomData,
        }
    }
}

impl<K: Id, V: fmt::Debug> fmt::Debug for Arena<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Arena")
            .field("len", &self.len())
            .field("data", &self.data)
            .finish()
    }
}

impl<K: Id, V: PartialEq> PartialEq for Arena<K, V> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<K: Id, V: Eq> Eq for Arena<K, V> {}

impl<'a, K: Id, V> IntoIterator for &'a Arena<K, V> {
    type Item = (Idx<K, V>, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use crate::{Arena, Id, Idx, NewId};

/// A side table keyed by the ids of another arena.
///
/// Slots are created on demand, so a map over a large arena only pays for
/// the keys that were actually inserted (plus the gaps before them).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaMap<K: NewId, V> {
    arena: Arena<K, Option<V>>,
}

impl<K: NewId, V> Default for ArenaMap<K, V> {
    fn default() -> Self {
        Self {
            arena: Default::default(),
        }
    }
}

impl<K: NewId, V> ArenaMap<K, V> {
    #[inline]
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    #[inline]
    pub fn insert(&mut self, key: impl IntoRaw<K>, value: V) -> Option<V> {
        let idx = self.arena.grow_to_fit(key.into_raw());
        core::mem::replace(&mut self.arena[idx], Some(value))
    }

    #[inline]
    pub fn get(&self, key: impl IntoRaw<K>) -> Option<&V> {
        self.arena
            .get(Idx::from_raw(key.into_raw()))
            .and_then(Option::as_ref)
    }
}

pub trait IntoRaw<K: Id> {
    fn into_raw(self) -> K;
}

impl<K: Id> IntoRaw<K> for K {
    fn into_raw(self) -> K {
        self
    }
}

impl<K: Id, V> IntoRaw<K> for Idx<K, V> {
    fn into_raw(self) -> K {
        Idx::into_raw(self)
    }
}

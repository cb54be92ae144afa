use core::{fmt::Debug, hash::Hash};

/// A trait for index types used in arenas.
///
/// An [`Id`] is both the position of a value inside an arena and a
/// type-level tag, so that a class index can never be used to look up a
/// function.
pub trait Id: Copy + Ord + Hash + Debug {
    /// The maximum value (as a usize) this id type can represent.
    const MAX: usize;

    /// Converts a `usize` position to this id type.
    ///
    /// The input `idx` must be less than `Self::MAX`.
    fn from_usize(idx: usize) -> Self;

    /// Converts this id type back into a `usize` position.
    fn into_usize(self) -> usize;
}

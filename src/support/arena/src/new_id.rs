use crate::Id;

/// Marker for id types declared with [`new_id_with_niche!`].
pub trait NewId: Id {}

/// Declares a new id type backed by a non-zero integer, so that
/// `Option<Idx<..>>` costs nothing extra.
#[macro_export]
macro_rules! new_id_with_niche {
    ($name: ident, $ty: ty) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(::core::num::NonZero<$ty>);

        impl ::arena::Id for $name {
            const MAX: usize = (<$ty>::MAX - 1) as usize;

            #[inline]
            fn from_usize(idx: usize) -> Self {
                let raw = <$ty>::try_from(idx + 1).expect("arena id overflowed");
                Self(::core::num::NonZero::new(raw).expect("arena id is never zero"))
            }

            #[inline]
            fn into_usize(self) -> usize {
                (self.0.get() - 1) as usize
            }
        }

        impl ::arena::NewId for $name {}
    };
}

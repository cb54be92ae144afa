use crate::Visibility;
use bitflags::bitflags;

bitflags! {
    /// Attribute set shared by functions, fields and classes.
    ///
    /// Finality is tracked separately for the native side and the target side,
    /// since hierarchy resolution can make the two disagree.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Attributes: u32 {
        const PRIVATE = 1 << 0;
        const PROTECTED = 1 << 1;
        const PUBLIC = 1 << 2;

        const NATIVE = 1 << 3;
        const ABSTRACT = 1 << 4;
        const STATIC = 1 << 5;

        const FINAL_IN_TARGET = 1 << 6;
        const FINAL_IN_NATIVE = 1 << 7;
        const FINAL = Self::FINAL_IN_TARGET.bits() | Self::FINAL_IN_NATIVE.bits();

        const GETTER_FUNCTION = 1 << 8;
        const SETTER_FUNCTION = 1 << 9;
        const FINAL_OVERLOAD = 1 << 10;
        const INTERFACE_FUNCTION = 1 << 11;
        const FORCE_SHELL_IMPLEMENTATION = 1 << 12;

        const VISIBILITY = Self::PRIVATE.bits() | Self::PROTECTED.bits() | Self::PUBLIC.bits();
    }
}

impl Attributes {
    pub fn visibility(self) -> Visibility {
        if self.contains(Self::PRIVATE) {
            Visibility::Private
        } else if self.contains(Self::PROTECTED) {
            Visibility::Protected
        } else {
            Visibility::Public
        }
    }

    pub fn with_visibility(self, visibility: Visibility) -> Self {
        self.difference(Self::VISIBILITY) | visibility.attribute()
    }

    /// True if either side considers the entity final.
    pub fn is_final(self) -> bool {
        self.intersects(Self::FINAL)
    }
}

#[test]
fn test_with_visibility_replaces_previous_visibility() {
    let attributes = Attributes::PROTECTED | Attributes::FINAL_IN_NATIVE;
    let widened = attributes.with_visibility(Visibility::Public);

    assert_eq!(widened.visibility(), Visibility::Public);
    assert!(!widened.contains(Attributes::PROTECTED));
    assert!(widened.contains(Attributes::FINAL_IN_NATIVE));
}

#[test]
fn test_final_means_either_side() {
    assert!(Attributes::FINAL_IN_TARGET.is_final());
    assert!(Attributes::FINAL_IN_NATIVE.is_final());
    assert!(!Attributes::PUBLIC.is_final());
}

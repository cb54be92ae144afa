use crate::Func;
use bitflags::bitflags;
use std::cmp::Ordering;

bitflags! {
    /// How two functions relate to each other.
    #[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
    pub struct Comparison: u32 {
        const EQUAL_IMPLEMENTOR = 1 << 0;
        const EQUAL_ATTRIBUTES = 1 << 1;
        const EQUAL_RETURN_TYPE = 1 << 2;
        const NAME_LESS_THAN = 1 << 3;
        const EQUAL_NAME = 1 << 4;
        const EQUAL_ARGUMENTS = 1 << 5;

        /// The same overridable signature, regardless of return type or attributes.
        const PRETTY_SIMILAR = Self::EQUAL_NAME.bits() | Self::EQUAL_ARGUMENTS.bits();
    }
}

impl Comparison {
    pub fn is_same_signature(self) -> bool {
        self.contains(Self::PRETTY_SIMILAR)
    }
}

impl Func {
    /// Compares two functions by textual type names only.
    ///
    /// Names are compared on the original (pre-rename) name. Return types and
    /// arguments are equal when their target type names are equal, so
    /// constness and instantiations do not matter here.
    pub fn compare(&self, other: &Func) -> Comparison {
        let mut result = Comparison::empty();

        if self.implementor == other.implementor {
            result |= Comparison::EQUAL_IMPLEMENTOR;
        }

        if self.attributes == other.attributes {
            result |= Comparison::EQUAL_ATTRIBUTES;
        }

        let same_return_type = match (&self.return_type, &other.return_type) {
            (None, None) => true,
            (Some(a), Some(b)) => a.name() == b.name(),
            _ => false,
        };

        if same_return_type {
            result |= Comparison::EQUAL_RETURN_TYPE;
        }

        match self.original_name.cmp(&other.original_name) {
            Ordering::Less => result |= Comparison::NAME_LESS_THAN,
            Ordering::Equal => result |= Comparison::EQUAL_NAME,
            Ordering::Greater => (),
        }

        if self.arguments.len() == other.arguments.len()
            && self
                .arguments
                .iter()
                .zip(other.arguments.iter())
                .all(|(a, b)| a.ty.name() == b.ty.name())
        {
            result |= Comparison::EQUAL_ARGUMENTS;
        }

        result
    }
}

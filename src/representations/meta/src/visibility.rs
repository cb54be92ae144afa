use crate::Attributes;
use derive_more::IsVariant;
use std::fmt::Display;

// NOTE: Visibility is ordered from least private to most private
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, IsVariant)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn attribute(self) -> Attributes {
        match self {
            Visibility::Public => Attributes::PUBLIC,
            Visibility::Protected => Attributes::PROTECTED,
            Visibility::Private => Attributes::PRIVATE,
        }
    }

    /// The least restrictive of the two.
    pub fn widest(self, other: Self) -> Self {
        self.min(other)
    }
}

impl Display for Visibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Private => write!(f, "private"),
        }
    }
}

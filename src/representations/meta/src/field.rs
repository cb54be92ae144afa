use crate::{Attributes, ClassRef, TypeUsage, Visibility};

/// A data member. Accessor functions for it are synthesized on demand and
/// kept outside the field itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub name: String,
    pub attributes: Attributes,
    pub original_attributes: Attributes,
    pub ty: TypeUsage,
    pub enclosing_class: ClassRef,
}

impl Field {
    pub fn new(
        name: impl Into<String>,
        ty: TypeUsage,
        attributes: Attributes,
        enclosing_class: ClassRef,
    ) -> Self {
        Self {
            name: name.into(),
            attributes,
            original_attributes: attributes,
            ty,
            enclosing_class,
        }
    }

    pub fn copied_for(&self, enclosing_class: ClassRef) -> Self {
        Self {
            enclosing_class,
            ..self.clone()
        }
    }

    pub fn visibility(&self) -> Visibility {
        self.attributes.visibility()
    }

    pub fn is_public(&self) -> bool {
        self.visibility().is_public()
    }

    pub fn is_static(&self) -> bool {
        self.attributes.contains(Attributes::STATIC)
    }
}

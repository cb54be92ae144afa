use derive_more::IsVariant;
use std::{fmt::Write, sync::Arc};
use type_system::TypeEntry;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum TypeUsageKind {
    Primitive,
    Object,
    Enum,
    Flags,
    Array,
    NativePointer,
}

/// A single use of a type, with its qualifiers.
///
/// `element_type` is set iff `kind` is [`TypeUsageKind::Array`]; the
/// constructors below are the only way to make an array usage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeUsage {
    kind: TypeUsageKind,
    entry: Arc<TypeEntry>,
    pub is_constant: bool,
    pub is_reference: bool,
    pub indirections: u32,
    element_type: Option<Box<TypeUsage>>,
    pub array_element_count: Option<usize>,
    pub instantiations: Vec<TypeUsage>,
}

impl TypeUsage {
    pub fn new(kind: TypeUsageKind, entry: Arc<TypeEntry>) -> Self {
        debug_assert!(!kind.is_array(), "array usages are created with TypeUsage::array_of");

        Self {
            kind,
            entry,
            is_constant: false,
            is_reference: false,
            indirections: 0,
            element_type: None,
            array_element_count: None,
            instantiations: vec![],
        }
    }

    pub fn primitive(entry: Arc<TypeEntry>) -> Self {
        Self::new(TypeUsageKind::Primitive, entry)
    }

    pub fn object(entry: Arc<TypeEntry>) -> Self {
        Self::new(TypeUsageKind::Object, entry)
    }

    pub fn array_of(element: TypeUsage, count: Option<usize>) -> Self {
        Self {
            kind: TypeUsageKind::Array,
            entry: element.entry.clone(),
            is_constant: false,
            is_reference: false,
            indirections: 0,
            element_type: Some(Box::new(element)),
            array_element_count: count,
            instantiations: vec![],
        }
    }

    pub fn constant(mut self) -> Self {
        self.is_constant = true;
        self
    }

    pub fn reference(mut self) -> Self {
        self.is_reference = true;
        self
    }

    pub fn pointer(mut self) -> Self {
        self.indirections += 1;
        self
    }

    pub fn instantiated_with(mut self, instantiations: Vec<TypeUsage>) -> Self {
        self.instantiations = instantiations;
        self
    }

    pub fn kind(&self) -> TypeUsageKind {
        self.kind
    }

    pub fn entry(&self) -> &Arc<TypeEntry> {
        &self.entry
    }

    pub fn element_type(&self) -> Option<&TypeUsage> {
        self.element_type.as_deref()
    }

    pub fn is_array(&self) -> bool {
        self.kind.is_array()
    }

    pub fn has_instantiations(&self) -> bool {
        !self.instantiations.is_empty()
    }

    pub fn actual_indirections(&self) -> u32 {
        self.indirections + u32::from(self.is_reference)
    }

    /// The type's name in the target language. Qualifiers and instantiations
    /// are not part of it.
    pub fn name(&self) -> String {
        match &self.element_type {
            Some(element) => format!("{}[]", element.name()),
            None => self.entry.target_name.clone(),
        }
    }

    /// The native spelling of this type, e.g. `const QList<int > *&`.
    pub fn cpp_signature(&self) -> String {
        let mut signature = String::new();

        if let Some(element) = &self.element_type {
            signature.push_str(&element.cpp_signature());
            match self.array_element_count {
                Some(count) => write!(signature, "[{count}]").expect("write to string"),
                None => signature.push_str("[]"),
            }
            return signature;
        }

        if self.is_constant {
            signature.push_str("const ");
        }

        signature.push_str(&self.entry.qualified_name);

        if self.has_instantiations() {
            signature.push('<');
            for (i, instantiation) in self.instantiations.iter().enumerate() {
                if i > 0 {
                    signature.push_str(", ");
                }
                signature.push_str(&instantiation.cpp_signature());
            }
            signature.push_str(" >");
        }

        if self.actual_indirections() > 0 {
            signature.push(' ');
            signature.extend(std::iter::repeat_n('*', self.indirections as usize));
            if self.is_reference {
                signature.push('&');
            }
        }

        signature
    }

    /// The rendering used inside modification lookup keys:
    /// `["const "] name ["&"] ["*"]*`.
    pub fn minimal_signature(&self) -> String {
        let mut signature = String::new();

        if self.is_constant {
            signature.push_str("const ");
        }

        signature.push_str(&self.entry.qualified_name);

        if self.is_reference {
            signature.push('&');
        }

        signature.extend(std::iter::repeat_n('*', self.indirections as usize));
        signature
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use type_system::TypeEntryKind;

    fn entry(name: &str, kind: TypeEntryKind) -> Arc<TypeEntry> {
        Arc::new(TypeEntry::new(name, kind))
    }

    #[test]
    fn test_cpp_signature() {
        let int = TypeUsage::primitive(TypeEntry::primitive("int"));
        let list = TypeUsage::object(entry("QList", TypeEntryKind::Container))
            .instantiated_with(vec![int.clone()])
            .constant()
            .pointer()
            .reference();

        assert_eq!(int.cpp_signature(), "int");
        assert_eq!(list.cpp_signature(), "const QList<int > *&");
        assert_eq!(list.minimal_signature(), "const QList&*");
        assert_eq!(list.actual_indirections(), 2);
    }

    #[test]
    fn test_array_name_and_copy() {
        let element = TypeUsage::primitive(TypeEntry::primitive("int"));
        let array = TypeUsage::array_of(element, Some(4));
        let copy = array.clone();

        assert_eq!(array.name(), "int[]");
        assert_eq!(array.cpp_signature(), "int[4]");
        assert!(copy.element_type().is_some_and(|element| element.name() == "int"));
        assert_eq!(copy, array);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "TypeUsage::array_of")]
    fn test_array_kind_needs_element() {
        TypeUsage::new(TypeUsageKind::Array, TypeEntry::primitive("int"));
    }

    #[test]
    fn test_name_ignores_qualifiers() {
        let qualified = TypeEntry::new("Outer::Inner", TypeEntryKind::Value).with_target_name("Inner");
        let usage = TypeUsage::object(Arc::new(qualified)).constant().reference();

        assert_eq!(usage.name(), "Inner");
        assert_eq!(usage.minimal_signature(), "const Outer::Inner&");
    }
}

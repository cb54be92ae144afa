use crate::{Attributes, ClassRef, EnumRef, FieldRef, FuncRef};
use std::sync::Arc;
use type_system::TypeEntry;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Class {
    pub type_entry: Arc<TypeEntry>,
    pub attributes: Attributes,
    pub functions: Vec<FuncRef>,
    pub fields: Vec<FieldRef>,
    pub enums: Vec<EnumRef>,
    pub base_class: Option<ClassRef>,
    pub interfaces: Vec<ClassRef>,
    pub extracted_interface: Option<ClassRef>,
    pub primary_interface_implementor: Option<ClassRef>,
    pub functions_fixed: bool,
    pub has_virtuals: bool,
    pub has_nonpublic: bool,
}

impl Class {
    pub fn new(type_entry: Arc<TypeEntry>) -> Self {
        Self {
            type_entry,
            attributes: Attributes::PUBLIC,
            functions: vec![],
            fields: vec![],
            enums: vec![],
            base_class: None,
            interfaces: vec![],
            extracted_interface: None,
            primary_interface_implementor: None,
            functions_fixed: false,
            has_virtuals: false,
            has_nonpublic: false,
        }
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    pub fn with_base(mut self, base_class: ClassRef) -> Self {
        self.base_class = Some(base_class);
        self
    }

    /// Target name with native scope separators flattened, `Outer_Inner`.
    pub fn name(&self) -> String {
        self.type_entry.target_name.replace("::", "_")
    }

    pub fn qualified_native_name(&self) -> &str {
        &self.type_entry.qualified_name
    }

    pub fn full_name(&self) -> String {
        self.type_entry.full_name()
    }

    pub fn is_interface(&self) -> bool {
        self.type_entry.is_interface()
    }

    pub fn designates_interface(&self) -> bool {
        self.type_entry.designated_interface.is_some()
    }

    pub fn is_final(&self) -> bool {
        self.attributes.is_final()
    }

    pub fn is_abstract(&self) -> bool {
        self.attributes.contains(Attributes::ABSTRACT)
    }
}

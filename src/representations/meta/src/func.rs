use crate::{Argument, Attributes, ClassRef, TypeUsage, Visibility};
use derive_more::IsVariant;
use itertools::Itertools;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum FuncKind {
    Constructor,
    Destructor,
    Normal,
    Signal,
    /// A stub that only exists to satisfy the native compiler and is never
    /// called through the bindings.
    EmptyStub,
}

/// A member function in the metamodel.
///
/// `owner` is the class that declared the native function and never changes.
/// `implementor` is the class whose function list holds this entry, and
/// `interface_source` is set when the entry was merged in from an interface.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Func {
    pub name: String,
    pub original_name: String,
    pub kind: FuncKind,
    pub attributes: Attributes,
    pub original_attributes: Attributes,
    pub arguments: Vec<Argument>,
    pub return_type: Option<TypeUsage>,
    pub is_constant: bool,
    pub owner: ClassRef,
    pub implementor: ClassRef,
    pub interface_source: Option<ClassRef>,
}

impl Func {
    pub fn new(name: impl Into<String>, kind: FuncKind, owner: ClassRef) -> Self {
        let name = name.into();

        Self {
            original_name: name.clone(),
            name,
            kind,
            attributes: Attributes::empty(),
            original_attributes: Attributes::empty(),
            arguments: vec![],
            return_type: None,
            is_constant: false,
            owner,
            implementor: owner,
            interface_source: None,
        }
    }

    /// Sets the live attributes and the pre-resolution snapshot together,
    /// the way the binder hands functions over.
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self.original_attributes = attributes;
        self
    }

    pub fn with_argument(mut self, name: impl Into<String>, ty: TypeUsage) -> Self {
        self.arguments.push(Argument::new(name, ty));
        self
    }

    pub fn with_return_type(mut self, ty: TypeUsage) -> Self {
        self.return_type = Some(ty);
        self
    }

    pub fn constant(mut self) -> Self {
        self.is_constant = true;
        self
    }

    /// Produces the entry that `implementor` holds for this function.
    ///
    /// Arguments and the return type are deep copies; `owner` and
    /// `interface_source` are carried over.
    pub fn copied_for(&self, implementor: ClassRef) -> Self {
        Self {
            implementor,
            ..self.clone()
        }
    }

    pub fn is_final(&self) -> bool {
        self.attributes.is_final()
    }

    pub fn is_final_in_native(&self) -> bool {
        self.attributes.contains(Attributes::FINAL_IN_NATIVE)
    }

    pub fn is_final_in_target(&self) -> bool {
        self.attributes.contains(Attributes::FINAL_IN_TARGET)
    }

    pub fn is_static(&self) -> bool {
        self.attributes.contains(Attributes::STATIC)
    }

    pub fn is_abstract(&self) -> bool {
        self.attributes.contains(Attributes::ABSTRACT)
    }

    pub fn is_forced_shell_implementation(&self) -> bool {
        self.attributes
            .contains(Attributes::FORCE_SHELL_IMPLEMENTATION)
    }

    pub fn is_final_overload(&self) -> bool {
        self.attributes.contains(Attributes::FINAL_OVERLOAD)
    }

    pub fn is_interface_function(&self) -> bool {
        self.attributes.contains(Attributes::INTERFACE_FUNCTION)
    }

    pub fn is_inconsistent(&self) -> bool {
        self.is_final_in_native() != self.is_final_in_target()
    }

    pub fn is_constructor(&self) -> bool {
        self.kind.is_constructor()
    }

    pub fn is_destructor(&self) -> bool {
        self.kind.is_destructor()
    }

    pub fn is_signal(&self) -> bool {
        self.kind.is_signal()
    }

    pub fn is_empty_stub(&self) -> bool {
        self.kind.is_empty_stub()
    }

    pub fn visibility(&self) -> Visibility {
        self.attributes.visibility()
    }

    pub fn set_visibility(&mut self, visibility: Visibility) {
        self.attributes = self.attributes.with_visibility(visibility);
    }

    pub fn is_private(&self) -> bool {
        self.visibility().is_private()
    }

    pub fn is_protected(&self) -> bool {
        self.visibility().is_protected()
    }

    pub fn is_public(&self) -> bool {
        self.visibility().is_public()
    }

    pub fn was_public(&self) -> bool {
        self.original_attributes.contains(Attributes::PUBLIC)
    }

    pub fn was_protected(&self) -> bool {
        self.original_attributes.contains(Attributes::PROTECTED)
    }

    /// Human readable native signature, e.g. `resize(int, const QSize &) const`.
    pub fn signature(&self) -> String {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.ty.cpp_signature())
            .join(", ");

        let constness = if self.is_constant { " const" } else { "" };
        format!("{}({}){}", self.name, arguments, constness)
    }

    /// The key used to look up modifications. Built from the original name,
    /// so renames never change which modifications apply.
    pub fn minimal_signature(&self) -> String {
        let arguments = self
            .arguments
            .iter()
            .map(|argument| argument.ty.minimal_signature())
            .join(",");

        let constness = if self.is_constant { "const" } else { "" };
        format!("{}({}){}", self.original_name, arguments, constness)
    }
}

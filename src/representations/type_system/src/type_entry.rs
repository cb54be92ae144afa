use derive_more::IsVariant;
use std::sync::Arc;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, IsVariant)]
pub enum TypeEntryKind {
    Primitive,
    Void,
    Enum,
    Flags,
    Value,
    Object,
    QObject,
    Interface,
    Container,
    Array,
    NativePointer,
}

/// A named type known to the type system.
///
/// `qualified_name` is the native, scope-qualified spelling (`Outer::Inner`),
/// `target_name` is what the type is called in the generated bindings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeEntry {
    pub qualified_name: String,
    pub target_name: String,
    pub package: String,
    pub kind: TypeEntryKind,
    pub designated_interface: Option<Arc<TypeEntry>>,
}

impl TypeEntry {
    pub fn new(qualified_name: impl Into<String>, kind: TypeEntryKind) -> Self {
        let qualified_name = qualified_name.into();

        Self {
            target_name: qualified_name.clone(),
            qualified_name,
            package: String::new(),
            kind,
            designated_interface: None,
        }
    }

    pub fn primitive(name: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(name, TypeEntryKind::Primitive))
    }

    pub fn with_target_name(mut self, target_name: impl Into<String>) -> Self {
        self.target_name = target_name.into();
        self
    }

    pub fn with_package(mut self, package: impl Into<String>) -> Self {
        self.package = package.into();
        self
    }

    pub fn with_designated_interface(mut self, interface: Arc<TypeEntry>) -> Self {
        self.designated_interface = Some(interface);
        self
    }

    pub fn name(&self) -> &str {
        &self.target_name
    }

    pub fn is_interface(&self) -> bool {
        self.kind.is_interface()
    }

    pub fn is_complex(&self) -> bool {
        matches!(
            self.kind,
            TypeEntryKind::Value
                | TypeEntryKind::Object
                | TypeEntryKind::QObject
                | TypeEntryKind::Interface
                | TypeEntryKind::Container
        )
    }

    /// The package-qualified target name, `package.Name`.
    pub fn full_name(&self) -> String {
        if self.package.is_empty() {
            self.target_name.clone()
        } else {
            format!("{}.{}", self.package, self.target_name)
        }
    }
}

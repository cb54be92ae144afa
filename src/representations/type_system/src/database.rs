use crate::{FunctionModification, normalize_signature};
use indexmap::IndexMap;

/// Declarative function modifications, keyed by implementing class and
/// normalized signature.
pub trait ModificationDatabase {
    /// Returns the modifications declared for `signature` on the class whose
    /// qualified native name is `class_name`, in declaration order.
    fn function_modifications(&self, class_name: &str, signature: &str)
    -> Vec<FunctionModification>;

    /// Registers a modification in the scope of `class_name`.
    fn add_function_modification(&mut self, class_name: &str, modification: FunctionModification);
}

/// An in-memory modification database.
#[derive(Clone, Debug, Default)]
pub struct ModificationTable {
    by_class: IndexMap<String, Vec<FunctionModification>>,
}

impl ModificationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, class_name: &str, modification: FunctionModification) -> Self {
        self.add_function_modification(class_name, modification);
        self
    }

    pub fn modifications_of_class(&self, class_name: &str) -> &[FunctionModification] {
        self.by_class
            .get(class_name)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl ModificationDatabase for ModificationTable {
    fn function_modifications(
        &self,
        class_name: &str,
        signature: &str,
    ) -> Vec<FunctionModification> {
        let signature = normalize_signature(signature);

        self.modifications_of_class(class_name)
            .iter()
            .filter(|modification| modification.signature == signature)
            .cloned()
            .collect()
    }

    fn add_function_modification(
        &mut self,
        class_name: &str,
        mut modification: FunctionModification,
    ) {
        modification.signature = normalize_signature(&modification.signature);

        self.by_class
            .entry(class_name.to_string())
            .or_default()
            .push(modification);
    }
}

#[test]
fn test_lookup_is_per_class_and_normalized() {
    let table = ModificationTable::new()
        .with("Widget", FunctionModification::rename("foo( int )", "doFoo"))
        .with("Widget", FunctionModification::remove("bar(const QString &)"))
        .with("Button", FunctionModification::rename("foo(int)", "click"));

    let widget_foo = table.function_modifications("Widget", "foo(int)");
    assert_eq!(widget_foo.len(), 1);
    assert_eq!(widget_foo[0].renamed_to(), Some("doFoo"));

    assert_eq!(table.function_modifications("Widget", "bar(QString)").len(), 1);
    assert!(table.function_modifications("Label", "foo(int)").is_empty());
    assert_eq!(
        table.function_modifications("Button", "foo(int)")[0].renamed_to(),
        Some("click")
    );
}

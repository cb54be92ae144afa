use crate::{ClassRef, Func, FuncRef, MetaModel};
use type_system::{FunctionModification, ModificationDatabase, RemovalScope};

impl MetaModel {
    /// Modifications declared for `func` in the scope of `implementor`.
    pub fn modifications(
        &self,
        db: &dyn ModificationDatabase,
        func: &Func,
        implementor: ClassRef,
    ) -> Vec<FunctionModification> {
        db.function_modifications(
            self.classes[implementor].qualified_native_name(),
            &func.minimal_signature(),
        )
    }

    pub fn has_modifications(
        &self,
        db: &dyn ModificationDatabase,
        func: &Func,
        implementor: ClassRef,
    ) -> bool {
        !self.modifications(db, func, implementor).is_empty()
    }

    /// The name `func` gets after the first rename declared for its
    /// implementing class, if any.
    pub fn modified_name(&self, db: &dyn ModificationDatabase, func: &Func) -> String {
        self.modifications(db, func, func.implementor)
            .iter()
            .find_map(|modification| modification.renamed_to().map(str::to_string))
            .unwrap_or_else(|| func.name.clone())
    }

    pub fn is_modified_removed(
        &self,
        db: &dyn ModificationDatabase,
        func: &Func,
        scope: RemovalScope,
    ) -> bool {
        self.modifications(db, func, func.implementor)
            .iter()
            .any(|modification| modification.removes_from(scope))
    }

    /// Whether `class` holds a same-signature function that some
    /// modification does not remove.
    pub fn has_function_not_removed(
        &self,
        db: &dyn ModificationDatabase,
        class: ClassRef,
        func: &Func,
    ) -> bool {
        self.functions_equal_to(class, func)
            .into_iter()
            .any(|existing| {
                let modifications = self.modifications(db, &self.funcs[existing], class);
                modifications.is_empty()
                    || modifications
                        .iter()
                        .any(|modification| !modification.is_remove_modifier())
            })
    }

    /// Same-named signal on `class` whose modified name matches.
    pub fn has_signal(&self, db: &dyn ModificationDatabase, class: ClassRef, other: &Func) -> bool {
        if !other.is_signal() {
            return false;
        }

        self.functions(class)
            .find(|(_, func)| func.is_signal() && func.original_name == other.original_name)
            .is_some_and(|(_, func)| self.modified_name(db, other) == self.modified_name(db, func))
    }

    /// Drops the functions removed from `scope`.
    pub fn not_removed_from(
        &self,
        db: &dyn ModificationDatabase,
        functions: impl IntoIterator<Item = FuncRef>,
        scope: RemovalScope,
    ) -> Vec<FuncRef> {
        functions
            .into_iter()
            .filter(|func| !self.is_modified_removed(db, &self.funcs[*func], scope))
            .collect()
    }
}

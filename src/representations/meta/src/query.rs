use crate::{ClassRef, Func, FuncRef, MetaModel};
use bitflags::bitflags;

bitflags! {
    /// Filters for [`MetaModel::query_functions`].
    ///
    /// Every flag excludes the functions that fail it; a query is the
    /// conjunction of its flags. Constructors and destructors are the
    /// exception: they are left out unless their flag is requested.
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FunctionQuery: u32 {
        const VISIBLE = 1 << 0;
        const INVISIBLE = 1 << 1;
        const VIRTUAL_IN_TARGET = 1 << 2;
        const FINAL_IN_TARGET = 1 << 3;
        const FINAL_IN_NATIVE = 1 << 4;
        const VIRTUAL_IN_NATIVE = 1 << 5;
        const CLASS_IMPLEMENTS = 1 << 6;
        const CONSTRUCTORS = 1 << 7;
        const DESTRUCTORS = 1 << 8;
        const SIGNALS = 1 << 9;
        const NORMAL_FUNCTIONS = 1 << 10;
        const STATIC = 1 << 11;
        const NON_STATIC = 1 << 12;
        const EMPTY = 1 << 13;
        const NON_EMPTY = 1 << 14;
        const ABSTRACT = 1 << 15;
        const FORCED_SHELL = 1 << 16;
        const WAS_PUBLIC = 1 << 17;
        const WAS_PROTECTED = 1 << 18;
        const VIRTUAL = 1 << 19;
        const INCONSISTENT = 1 << 20;
    }
}

impl FunctionQuery {
    pub fn admits(self, func: &Func) -> bool {
        let implemented_here = func.owner == func.implementor;

        let rejects = [
            (Self::VISIBLE, func.is_private()),
            (Self::INVISIBLE, !func.is_private()),
            (Self::VIRTUAL_IN_TARGET, func.is_final_in_target()),
            (Self::FINAL_IN_TARGET, !func.is_final_in_target()),
            (Self::FINAL_IN_NATIVE, !func.is_final_in_native()),
            (Self::VIRTUAL_IN_NATIVE, func.is_final_in_native()),
            (Self::EMPTY, !func.is_empty_stub()),
            (Self::NON_EMPTY, func.is_empty_stub()),
            (Self::WAS_PUBLIC, !func.was_public()),
            (Self::WAS_PROTECTED, !func.was_protected()),
            (Self::CLASS_IMPLEMENTS, !implemented_here),
            (
                Self::INCONSISTENT,
                !func.is_inconsistent() || func.is_static(),
            ),
            (Self::SIGNALS, !func.is_signal()),
            (Self::NORMAL_FUNCTIONS, func.is_signal()),
            (
                Self::FORCED_SHELL,
                !func.is_forced_shell_implementation() || !func.is_final(),
            ),
            (
                Self::CONSTRUCTORS,
                !(func.is_constructor() && implemented_here),
            ),
            (
                Self::DESTRUCTORS,
                !(func.is_destructor() && implemented_here),
            ),
            (
                Self::VIRTUAL,
                func.is_final() || func.is_signal() || func.is_static(),
            ),
            (Self::STATIC, !func.is_static() || func.is_signal()),
            (Self::NON_STATIC, func.is_static()),
            (Self::ABSTRACT, !func.is_abstract()),
        ];

        if rejects
            .iter()
            .any(|(flag, rejected)| self.contains(*flag) && *rejected)
        {
            return false;
        }

        // Special members only show up when asked for explicitly
        let hidden_constructor = func.is_constructor() && !self.contains(Self::CONSTRUCTORS);
        let hidden_destructor = func.is_destructor() && !self.contains(Self::DESTRUCTORS);
        !hidden_constructor && !hidden_destructor
    }
}

impl MetaModel {
    /// The functions of `class` (its own list, sorted by name) that pass `query`.
    pub fn query_functions(&self, class: ClassRef, query: FunctionQuery) -> Vec<FuncRef> {
        self.functions(class)
            .filter(|(_, func)| query.admits(func))
            .map(|(func_ref, _)| func_ref)
            .collect()
    }

    fn query_all(&self, class: ClassRef, queries: &[FunctionQuery]) -> Vec<FuncRef> {
        queries
            .iter()
            .flat_map(|query| self.query_functions(class, *query))
            .collect()
    }

    /// Functions that make up the class's API in the target language.
    pub fn functions_in_target_lang(&self, class: ClassRef) -> Vec<FuncRef> {
        let info = &self.classes[class];
        let mut default_flags = FunctionQuery::NORMAL_FUNCTIONS | FunctionQuery::VISIBLE;

        // Interfaces don't implement functions
        if !info.is_interface() {
            default_flags |= FunctionQuery::CLASS_IMPLEMENTS;
        }

        // Only public functions in final classes
        if info.is_final() {
            default_flags |= FunctionQuery::WAS_PUBLIC;
        }

        self.query_all(
            class,
            &[
                FunctionQuery::CONSTRUCTORS | default_flags,
                FunctionQuery::FINAL_IN_TARGET | FunctionQuery::NON_STATIC | default_flags,
                FunctionQuery::VIRTUAL_IN_TARGET | FunctionQuery::NON_STATIC | default_flags,
                FunctionQuery::STATIC | default_flags,
                FunctionQuery::EMPTY | FunctionQuery::INVISIBLE,
            ],
        )
    }

    /// Functions the generated shell class has to re-declare.
    pub fn functions_in_shell_class(&self, class: ClassRef) -> Vec<FuncRef> {
        let default_flags = FunctionQuery::NORMAL_FUNCTIONS | FunctionQuery::VISIBLE;

        self.query_all(
            class,
            &[
                FunctionQuery::VIRTUAL | default_flags,
                FunctionQuery::FORCED_SHELL | default_flags,
            ],
        )
    }

    /// Originally protected, non-virtual functions that need a public
    /// call-through in the shell class.
    pub fn public_override_functions(&self, class: ClassRef) -> Vec<FuncRef> {
        let flags = FunctionQuery::WAS_PROTECTED | FunctionQuery::FINAL_IN_NATIVE;

        self.query_all(
            class,
            &[
                FunctionQuery::NORMAL_FUNCTIONS | flags,
                FunctionQuery::SIGNALS | flags,
            ],
        )
    }

    pub fn virtual_override_functions(&self, class: ClassRef) -> Vec<FuncRef> {
        let flags =
            FunctionQuery::NON_EMPTY | FunctionQuery::VISIBLE | FunctionQuery::VIRTUAL_IN_NATIVE;

        self.query_all(
            class,
            &[
                FunctionQuery::NORMAL_FUNCTIONS | flags,
                FunctionQuery::SIGNALS | flags,
            ],
        )
    }
}

#[cfg(test)]
mod tests {
    use crate::{Attributes, Class, ClassRef, Func, FuncKind, FuncRef, FunctionQuery, MetaModel};
    use std::sync::Arc;
    use type_system::{TypeEntry, TypeEntryKind};

    fn class(model: &mut MetaModel, name: &str) -> ClassRef {
        model.add_class(Class::new(Arc::new(TypeEntry::new(
            name,
            TypeEntryKind::Object,
        ))))
    }

    fn declare(
        model: &mut MetaModel,
        class: ClassRef,
        name: &str,
        kind: FuncKind,
        attributes: Attributes,
    ) -> FuncRef {
        model.declare_function(class, Func::new(name, kind, class).with_attributes(attributes))
    }

    #[test]
    fn test_special_members_need_their_flag() {
        let mut model = MetaModel::new();
        let widget = class(&mut model, "Widget");
        let constructor = declare(
            &mut model,
            widget,
            "Widget",
            FuncKind::Constructor,
            Attributes::PUBLIC,
        );
        let destructor = declare(
            &mut model,
            widget,
            "~Widget",
            FuncKind::Destructor,
            Attributes::PUBLIC,
        );
        let show = declare(&mut model, widget, "show", FuncKind::Normal, Attributes::PUBLIC);

        assert_eq!(model.query_functions(widget, FunctionQuery::VISIBLE), vec![show]);
        assert_eq!(
            model.query_functions(widget, FunctionQuery::CONSTRUCTORS),
            vec![constructor]
        );
        assert_eq!(
            model.query_functions(widget, FunctionQuery::DESTRUCTORS),
            vec![destructor]
        );
        assert!(model.has_constructors(widget));
    }

    #[test]
    fn test_inherited_constructor_is_not_listed() {
        let mut model = MetaModel::new();
        let base = class(&mut model, "Base");
        let derived = class(&mut model, "Derived");
        let constructor = declare(
            &mut model,
            base,
            "Base",
            FuncKind::Constructor,
            Attributes::PUBLIC,
        );

        let copy = model.funcs[constructor].copied_for(derived);
        model.add_function(derived, copy);

        assert!(!model.has_constructors(derived));
        assert!(model.query_functions(derived, FunctionQuery::CLASS_IMPLEMENTS).is_empty());
    }

    #[test]
    fn test_was_protected_uses_original_attributes() {
        let mut model = MetaModel::new();
        let widget = class(&mut model, "Widget");
        let update = declare(
            &mut model,
            widget,
            "update",
            FuncKind::Normal,
            Attributes::PROTECTED | Attributes::FINAL,
        );
        model.funcs[update].attributes = Attributes::PUBLIC | Attributes::FINAL;

        assert_eq!(model.public_override_functions(widget), vec![update]);
        assert!(model.query_functions(widget, FunctionQuery::WAS_PUBLIC).is_empty());
    }

    #[test]
    fn test_target_api_composition() {
        let mut model = MetaModel::new();
        let widget = class(&mut model, "Widget");
        let constructor = declare(
            &mut model,
            widget,
            "Widget",
            FuncKind::Constructor,
            Attributes::PUBLIC,
        );
        let show = declare(&mut model, widget, "show", FuncKind::Normal, Attributes::PUBLIC);
        let hide = declare(
            &mut model,
            widget,
            "hide",
            FuncKind::Normal,
            Attributes::PUBLIC | Attributes::FINAL,
        );
        let create = declare(
            &mut model,
            widget,
            "create",
            FuncKind::Normal,
            Attributes::PUBLIC | Attributes::STATIC | Attributes::FINAL,
        );
        let stub = declare(
            &mut model,
            widget,
            "paint",
            FuncKind::EmptyStub,
            Attributes::PRIVATE | Attributes::FINAL,
        );
        declare(&mut model, widget, "secret", FuncKind::Normal, Attributes::PRIVATE);
        let clicked = declare(&mut model, widget, "clicked", FuncKind::Signal, Attributes::PUBLIC);

        assert_eq!(
            model.functions_in_target_lang(widget),
            vec![constructor, hide, show, create, stub]
        );
        assert_eq!(model.functions_in_shell_class(widget), vec![show]);
        assert_eq!(
            model.virtual_override_functions(widget),
            vec![show, clicked]
        );
        assert!(model.has_signals(widget));
    }

    #[test]
    fn test_inconsistent_functions() {
        let mut model = MetaModel::new();
        let widget = class(&mut model, "Widget");
        let resize = declare(
            &mut model,
            widget,
            "resize",
            FuncKind::Normal,
            Attributes::PUBLIC | Attributes::FINAL_IN_NATIVE,
        );
        declare(
            &mut model,
            widget,
            "make",
            FuncKind::Normal,
            Attributes::PUBLIC | Attributes::STATIC | Attributes::FINAL_IN_TARGET,
        );

        assert!(model.has_inconsistent_functions(widget));
        assert_eq!(model.query_functions(widget, FunctionQuery::INCONSISTENT), vec![resize]);
    }
}

use super::fixture::{FINAL, Fixture, VIRTUAL, double, int};
use crate::{ResolveError, set_functions};
use diagnostics::WarningKind;
use meta::{Attributes, FuncKind, FunctionQuery, Visibility};
use type_system::{FunctionModification, ModificationDatabase};

#[test]
fn test_resolving_twice_changes_nothing() {
    let mut fixture = Fixture::new();
    let base = fixture.class("Base");
    let derived = fixture.subclass("Derived", base);
    fixture.func(base, "f", VIRTUAL, &[int()]);
    fixture.func(base, "g", FINAL, &[]);
    fixture.func(derived, "g", VIRTUAL, &[int()]);

    fixture.resolve(derived).unwrap();
    let model = fixture.model.clone();
    let warnings = fixture.diagnostics.len();

    fixture.resolve(derived).unwrap();
    fixture.resolve(base).unwrap();

    assert_eq!(fixture.model, model);
    assert_eq!(fixture.diagnostics.len(), warnings);
}

#[test]
fn test_virtual_function_is_inherited() {
    let mut fixture = Fixture::new();
    let base = fixture.class("Base");
    let derived = fixture.subclass("Derived", base);
    fixture.func(base, "f", VIRTUAL, &[int()]);

    fixture.resolve(derived).unwrap();

    let virtuals = fixture
        .model
        .query_functions(derived, FunctionQuery::VIRTUAL)
        .into_iter()
        .map(|func| &fixture.model.funcs[func])
        .collect::<Vec<_>>();

    assert_eq!(virtuals.len(), 1);
    assert_eq!(virtuals[0].name, "f");
    assert_eq!(virtuals[0].owner, base);
    assert_eq!(virtuals[0].implementor, derived);
    assert!(fixture.model.classes[base].functions_fixed);
    assert!(fixture.model.classes[derived].has_virtuals);
}

#[test]
fn test_inherits_across_several_levels() {
    let mut fixture = Fixture::new();
    let root = fixture.class("Root");
    let middle = fixture.subclass("Middle", root);
    let leaf = fixture.subclass("Leaf", middle);
    fixture.func(root, "g", VIRTUAL, &[]);
    fixture.func(middle, "h", Attributes::PROTECTED, &[]);

    fixture.resolve(leaf).unwrap();

    assert_eq!(fixture.only(leaf, "g").owner, root);
    assert_eq!(fixture.only(leaf, "h").owner, middle);
    assert_eq!(fixture.only(middle, "g").implementor, middle);
    assert!(fixture.model.classes[leaf].has_nonpublic);
}

#[test]
fn test_final_overload_is_marked() {
    let mut fixture = Fixture::new();
    let base = fixture.class("Base");
    let derived = fixture.subclass("Derived", base);
    let base_f = fixture.func(base, "f", FINAL, &[]);
    fixture.func(derived, "f", VIRTUAL, &[int()]);

    fixture.resolve(derived).unwrap();

    let overloads = fixture.named(derived, "f");
    assert_eq!(overloads.len(), 2);

    let (inherited, own): (Vec<_>, Vec<_>) =
        overloads.into_iter().partition(|func| func.owner == base);
    assert!(inherited[0].is_final_overload());
    assert!(!own[0].is_final_overload());

    // Shadowed by the overload, so it stays callable from the target language
    assert!(inherited[0].is_final_in_native());
    assert!(!inherited[0].is_final_in_target());
    assert!(inherited[0].is_forced_shell_implementation());

    assert_eq!(fixture.model.funcs[base_f].attributes, FINAL);
    assert_eq!(fixture.diagnostics.count_of(WarningKind::NameHidingShadow), 1);
    assert_eq!(fixture.diagnostics.count_of(WarningKind::HiddenOverload), 1);
}

#[test]
fn test_final_overloads_across_three_levels() {
    let mut fixture = Fixture::new();
    let a = fixture.class("A");
    let b = fixture.subclass("B", a);
    let c = fixture.subclass("C", b);
    let a_f = fixture.func(a, "f", FINAL, &[double()]);
    let b_f = fixture.func(b, "f", FINAL, &[]);
    fixture.func(c, "f", VIRTUAL, &[int()]);

    fixture.resolve(c).unwrap();

    let overloads = fixture.named(c, "f");
    assert_eq!(overloads.len(), 3);

    for owner in [a, b] {
        let inherited = overloads.iter().find(|func| func.owner == owner).unwrap();
        assert_eq!(inherited.implementor, c);
        assert!(inherited.is_final_in_native());
        assert!(!inherited.is_final_in_target());
        assert!(inherited.is_final_overload());
        assert!(inherited.is_forced_shell_implementation());
    }

    let own = overloads.iter().find(|func| func.owner == c).unwrap();
    assert!(!own.is_final());
    assert!(!own.is_final_overload());
    assert!(!own.is_forced_shell_implementation());

    // B only shadows A, between two natively final functions
    assert_eq!(fixture.model.funcs[a_f].attributes, FINAL);
    assert!(fixture.model.funcs[b_f].is_final_in_target());
    assert!(!fixture.model.funcs[b_f].is_final_overload());
    let b_copy = fixture
        .named(b, "f")
        .into_iter()
        .find(|func| func.owner == a)
        .unwrap();
    assert!(!b_copy.is_final_in_target());
    assert!(!b_copy.is_final_overload());
    assert!(!b_copy.is_forced_shell_implementation());

    assert_eq!(fixture.diagnostics.count_of(WarningKind::NameHidingShadow), 3);
    assert_eq!(fixture.diagnostics.count_of(WarningKind::HiddenOverload), 2);
}

#[test]
fn test_private_final_function_is_not_unshadowed() {
    let mut fixture = Fixture::new();
    let base = fixture.class("Base");
    let derived = fixture.subclass("Derived", base);
    fixture.func(base, "f", Attributes::PRIVATE | Attributes::FINAL, &[]);
    fixture.func(derived, "f", VIRTUAL, &[double()]);

    fixture.resolve(derived).unwrap();

    let inherited = fixture
        .named(derived, "f")
        .into_iter()
        .find(|func| func.owner == base)
        .unwrap();
    assert!(inherited.is_final_in_target());
    assert_eq!(fixture.diagnostics.count_of(WarningKind::NameHidingShadow), 0);
}

#[test]
fn test_rename_modification_is_applied() {
    let mut fixture = Fixture::new();
    let widget = fixture.class("Widget");
    fixture.func(widget, "foo", VIRTUAL, &[int()]);
    fixture
        .db
        .add_function_modification("Widget", FunctionModification::rename("foo(int)", "doFoo"));

    fixture.resolve(widget).unwrap();

    let foo = fixture.only(widget, "foo");
    assert_eq!(foo.name, "doFoo");
    assert_eq!(foo.original_name, "foo");
}

#[test]
fn test_first_rename_wins() {
    let mut fixture = Fixture::new();
    let widget = fixture.class("Widget");
    fixture.func(widget, "foo", VIRTUAL, &[int()]);
    fixture
        .db
        .add_function_modification("Widget", FunctionModification::rename("foo(int)", "doFoo"));
    fixture
        .db
        .add_function_modification("Widget", FunctionModification::rename("foo(int)", "callFoo"));

    fixture.resolve(widget).unwrap();

    assert_eq!(fixture.only(widget, "foo").name, "doFoo");
}

#[test]
fn test_override_inherits_virtuality_and_widens_visibility() {
    let mut fixture = Fixture::new();
    let base = fixture.class("Base");
    let derived = fixture.subclass("Derived", base);
    fixture.func(base, "f", Attributes::PROTECTED, &[]);
    fixture.func(derived, "f", FINAL, &[]);

    fixture.resolve(derived).unwrap();

    let f = fixture.only(derived, "f");
    assert!(!f.is_final_in_native());
    assert!(!f.is_final_in_target());
    assert_eq!(f.visibility(), Visibility::Public);
    assert_eq!(f.owner, derived);
    assert_eq!(fixture.diagnostics.count_of(WarningKind::VisibilityConflict), 1);
}

#[test]
fn test_private_override_of_abstract_function_becomes_stub() {
    let mut fixture = Fixture::new();
    let base = fixture.class("Base");
    let derived = fixture.subclass("Derived", base);
    fixture.func(base, "f", Attributes::PUBLIC | Attributes::ABSTRACT, &[]);
    fixture.func(derived, "f", Attributes::PRIVATE, &[]);

    fixture.resolve(derived).unwrap();

    let f = fixture.only(derived, "f");
    assert_eq!(f.kind, FuncKind::EmptyStub);
    assert_eq!(f.visibility(), Visibility::Public);
    assert!(f.is_final_in_native() && f.is_final_in_target());
    assert!(fixture.model.classes[base].is_abstract());
    assert!(!fixture.model.classes[derived].is_abstract());
    assert_eq!(
        fixture
            .diagnostics
            .count_of(WarningKind::AbstractPrivateOverride),
        1
    );
}

#[test]
fn test_abstract_function_makes_class_abstract() {
    let mut fixture = Fixture::new();
    let shape = fixture.class("Shape");
    fixture.model.classes[shape].attributes |= Attributes::FINAL;
    fixture.func(shape, "area", Attributes::PUBLIC | Attributes::ABSTRACT, &[]);

    fixture.resolve(shape).unwrap();

    let class = &fixture.model.classes[shape];
    assert!(class.is_abstract());
    assert!(!class.is_final());
}

#[test]
fn test_duplicate_functions_are_rejected() {
    let mut fixture = Fixture::new();
    let widget = fixture.class("Widget");
    fixture.func(widget, "f", VIRTUAL, &[int()]);
    fixture.func(widget, "f", VIRTUAL, &[int()]);

    assert_eq!(
        fixture.resolve(widget),
        Err(ResolveError::DuplicateFunction {
            class: "Widget".into(),
            first: "f(int)".into(),
            second: "f(int)".into(),
        })
    );
}

#[test]
fn test_removed_duplicates_are_allowed() {
    let mut fixture = Fixture::new();
    let widget = fixture.class("Widget");
    fixture.func(widget, "f", VIRTUAL, &[int()]);
    fixture.func(widget, "f", VIRTUAL, &[int()]);
    fixture
        .db
        .add_function_modification("Widget", FunctionModification::remove("f(int)"));

    assert_eq!(fixture.resolve(widget), Ok(()));
}

#[test]
fn test_failed_class_can_be_resolved_again() {
    let mut fixture = Fixture::new();
    let base = fixture.class("Base");
    let derived = fixture.subclass("Derived", base);
    fixture.func(base, "g", VIRTUAL, &[]);
    fixture.func(derived, "f", VIRTUAL, &[int()]);
    fixture.func(derived, "f", VIRTUAL, &[int()]);

    assert!(matches!(
        fixture.resolve(derived),
        Err(ResolveError::DuplicateFunction { .. })
    ));
    assert!(!fixture.model.classes[derived].functions_fixed);
    assert!(fixture.model.classes[base].functions_fixed);
    assert!(fixture.named(derived, "g").is_empty());

    fixture
        .db
        .add_function_modification("Derived", FunctionModification::remove("f(int)"));

    assert_eq!(fixture.resolve(derived), Ok(()));
    assert!(fixture.model.classes[derived].functions_fixed);
    assert_eq!(fixture.only(derived, "g").owner, base);
    assert_eq!(fixture.named(derived, "f").len(), 2);
}

#[test]
fn test_hidden_overload_warning_can_be_disabled() {
    let mut fixture = Fixture::new();
    fixture.options.warn_hidden_overloads = false;
    let widget = fixture.class("Widget");
    let virtual_f = fixture.func(widget, "f", VIRTUAL, &[int()]);
    let final_f = fixture.func(widget, "f", FINAL, &[]);

    let functions = fixture.model.classes[widget].functions.clone();
    set_functions(&mut fixture.ctx(), widget, functions).unwrap();

    assert!(fixture.model.funcs[final_f].is_forced_shell_implementation());
    assert!(!fixture.model.funcs[virtual_f].is_forced_shell_implementation());
    assert!(fixture.diagnostics.is_empty());
    assert_eq!(
        fixture
            .model
            .query_functions(widget, FunctionQuery::FORCED_SHELL),
        vec![final_f]
    );
}

#[test]
fn test_final_overloads_pass_duplicate_check() {
    let mut fixture = Fixture::new();
    let widget = fixture.class("Widget");
    fixture.func(widget, "f", VIRTUAL, &[int()]);
    let final_f = fixture.func(widget, "f", FINAL, &[int()]);

    assert_eq!(fixture.resolve(widget), Ok(()));
    assert!(fixture.model.funcs[final_f].is_final_overload());
}

use super::fixture::{Fixture, VIRTUAL, int};
use crate::{ResolveError, add_interface, extract_interface, resolve_model};
use meta::{Attributes, Field, Func, FuncKind};
use type_system::{FunctionModification, ModificationDatabase};

#[test]
fn test_extracted_interface_is_memoized() {
    let mut fixture = Fixture::new();
    let widget = fixture.projected_class("Widget", "WidgetInterface");
    fixture.func(widget, "paint", VIRTUAL, &[]);
    fixture
        .model
        .declare_function(widget, Func::new("Widget", FuncKind::Constructor, widget));
    fixture
        .model
        .add_field(widget, Field::new("size", int(), Attributes::PUBLIC, widget));
    fixture
        .model
        .add_field(widget, Field::new("cache", int(), Attributes::PRIVATE, widget));

    let interface = extract_interface(&mut fixture.ctx(), widget).unwrap();
    assert_eq!(extract_interface(&mut fixture.ctx(), widget), Ok(interface));

    let info = &fixture.model.classes[interface];
    assert!(info.is_interface());
    assert_eq!(info.primary_interface_implementor, Some(widget));
    assert_eq!(info.base_class, None);
    assert_eq!(info.fields.len(), 1);
    assert_eq!(fixture.model.fields[info.fields[0]].enclosing_class, interface);

    let paint = fixture.only(interface, "paint");
    assert_eq!(paint.implementor, interface);
    assert!(fixture.named(interface, "Widget").is_empty());

    assert_eq!(fixture.model.classes[widget].interfaces, vec![interface]);
    assert_eq!(fixture.named(widget, "paint").len(), 1);
}

#[test]
fn test_extracting_without_projection_fails() {
    let mut fixture = Fixture::new();
    let widget = fixture.class("Widget");

    assert_eq!(
        extract_interface(&mut fixture.ctx(), widget),
        Err(ResolveError::NotAnInterfaceProjection {
            class: "Widget".into()
        })
    );
}

#[test]
fn test_interface_functions_are_merged() {
    let mut fixture = Fixture::new();
    let widget = fixture.class("Widget");
    let paintable = fixture.interface("Paintable");
    fixture.func(widget, "update", VIRTUAL, &[]);
    fixture.func(paintable, "draw", VIRTUAL | Attributes::ABSTRACT, &[]);
    fixture.func(paintable, "update", VIRTUAL, &[]);
    fixture
        .db
        .add_function_modification("Paintable", FunctionModification::rename("draw()", "render"));

    add_interface(&mut fixture.ctx(), widget, paintable).unwrap();

    let draw = fixture.only(widget, "draw");
    assert_eq!(draw.owner, widget);
    assert_eq!(draw.implementor, widget);
    assert_eq!(draw.interface_source, Some(paintable));
    assert!(draw.is_interface_function());
    assert!(!fixture.only(widget, "update").is_interface_function());
    assert_eq!(fixture.db.modifications_of_class("Widget").len(), 1);

    fixture.resolve(widget).unwrap();
    assert_eq!(fixture.only(widget, "draw").name, "render");
    assert!(fixture.model.classes[widget].is_abstract());
}

#[test]
fn test_interface_registered_once() {
    let mut fixture = Fixture::new();
    let widget = fixture.class("Widget");
    let paintable = fixture.interface("Paintable");

    add_interface(&mut fixture.ctx(), widget, paintable).unwrap();

    assert_eq!(
        add_interface(&mut fixture.ctx(), widget, paintable),
        Err(ResolveError::DuplicateInterface {
            class: "Widget".into(),
            interface: "Paintable".into(),
        })
    );
}

#[test]
fn test_resolve_model_extracts_projections() {
    let mut fixture = Fixture::new();
    let base = fixture.class("Base");
    let widget = fixture.projected_class("Widget", "WidgetInterface");
    fixture.model.classes[widget].base_class = Some(base);
    fixture.func(base, "show", VIRTUAL, &[]);
    fixture.func(widget, "paint", VIRTUAL, &[int()]);

    resolve_model(&mut fixture.ctx()).unwrap();

    let interface = fixture.model.classes[widget].extracted_interface.unwrap();
    assert_eq!(fixture.model.classes[widget].interfaces, vec![interface]);
    assert_eq!(fixture.only(widget, "show").owner, base);
    assert_eq!(fixture.named(widget, "paint").len(), 1);
    assert!(
        fixture
            .model
            .classes
            .values()
            .all(|class| class.functions_fixed)
    );
    assert!(fixture.diagnostics.is_empty());
}

#[test]
fn test_resolve_model_fixes_extracted_interfaces() {
    let mut fixture = Fixture::new();
    let widget = fixture.projected_class("Widget", "WidgetInterface");
    fixture.func(widget, "paint", VIRTUAL, &[]);
    fixture.db.add_function_modification(
        "WidgetInterface",
        FunctionModification::rename("paint()", "render"),
    );

    resolve_model(&mut fixture.ctx()).unwrap();

    let interface = fixture.model.classes[widget].extracted_interface.unwrap();
    assert!(fixture.model.classes[interface].functions_fixed);
    assert_eq!(fixture.only(interface, "paint").name, "render");
    assert_eq!(fixture.only(widget, "paint").name, "paint");
}

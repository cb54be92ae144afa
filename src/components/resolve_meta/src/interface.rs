use crate::{ResolveCtx, ResolveError};
use meta::{Attributes, Class, ClassRef, Func};

/// Builds the interface projection of `class` the first time it is asked
/// for, and registers it as one of the class's own interfaces.
pub fn extract_interface(ctx: &mut ResolveCtx, class: ClassRef) -> Result<ClassRef, ResolveError> {
    let info = &ctx.model.classes[class];

    if let Some(interface) = info.extracted_interface {
        return Ok(interface);
    }

    let Some(entry) = info.type_entry.designated_interface.clone() else {
        return Err(ResolveError::NotAnInterfaceProjection {
            class: info.qualified_native_name().into(),
        });
    };

    let functions = info
        .functions
        .iter()
        .map(|func| &ctx.model.funcs[*func])
        .filter(|func| !func.is_constructor())
        .cloned()
        .collect::<Vec<Func>>();

    let fields = info
        .fields
        .iter()
        .map(|field| &ctx.model.fields[*field])
        .filter(|field| field.is_public())
        .cloned()
        .collect::<Vec<_>>();

    let attributes = info.attributes;
    let interface = ctx.model.add_class(Class {
        primary_interface_implementor: Some(class),
        ..Class::new(entry).with_attributes(attributes)
    });

    log::debug!(
        "extracted interface '{}' from '{}'",
        ctx.model.class_name(interface),
        ctx.model.class_name(class)
    );

    for func in functions {
        ctx.model.add_function(interface, func);
    }

    for field in fields {
        ctx.model.add_field(interface, field.copied_for(interface));
    }

    ctx.model.classes[class].extracted_interface = Some(interface);
    add_interface(ctx, class, interface)?;
    Ok(interface)
}

/// Merges the functions of `interface` that `class` does not have yet.
///
/// Modifications declared against the interface are registered for `class`
/// too, so renames and removals reach every implementor.
pub fn add_interface(
    ctx: &mut ResolveCtx,
    class: ClassRef,
    interface: ClassRef,
) -> Result<(), ResolveError> {
    if ctx.model.classes[class].interfaces.contains(&interface) {
        return Err(ResolveError::DuplicateInterface {
            class: ctx.model.classes[class].qualified_native_name().into(),
            interface: ctx.model.classes[interface].qualified_native_name().into(),
        });
    }

    ctx.model.classes[class].interfaces.push(interface);

    let class_name = ctx.model.classes[class]
        .qualified_native_name()
        .to_string();

    for func in ctx.model.classes[interface].functions.clone() {
        let source = &ctx.model.funcs[func];

        if source.is_constructor() || ctx.model.has_function(class, source) {
            continue;
        }

        let modifications = ctx.model.modifications(&*ctx.db, source, interface);

        let copy = Func {
            owner: class,
            interface_source: Some(interface),
            attributes: source.attributes | Attributes::INTERFACE_FUNCTION,
            ..source.clone()
        };

        for modification in modifications {
            ctx.db.add_function_modification(&class_name, modification);
        }

        ctx.model.add_function(class, copy);
    }

    Ok(())
}

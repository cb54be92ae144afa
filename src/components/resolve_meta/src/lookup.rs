use diagnostics::{Diagnostics, WarningKind};
use meta::{Class, ClassRef, EnumRef, EnumValueRef, MetaModel};
use type_system::TypeEntry;

/// Finds a class by qualified native name, then by full target name, then
/// by short name.
pub fn find_class(model: &MetaModel, name: &str) -> Option<ClassRef> {
    if name.is_empty() {
        return None;
    }

    let by = |matches: &dyn Fn(&Class) -> bool| {
        model
            .classes
            .iter()
            .find(|(_, class)| matches(class))
            .map(|(class_ref, _)| class_ref)
    };

    by(&|class| class.qualified_native_name() == name)
        .or_else(|| by(&|class| class.full_name() == name))
        .or_else(|| by(&|class| class.name() == name))
}

/// Enums of a class that designates an interface may have moved to the
/// extracted interface.
fn projection(class: &Class) -> Option<ClassRef> {
    class
        .extracted_interface
        .filter(|_| class.designates_interface())
}

pub fn find_enum(model: &MetaModel, class: ClassRef, name: &str) -> Option<EnumRef> {
    let info = &model.classes[class];

    info.enums
        .iter()
        .copied()
        .find(|enumeration| model.enums[*enumeration].name == name)
        .or_else(|| projection(info).and_then(|interface| find_enum(model, interface, name)))
}

/// Searches `class`, its extracted interface and its base classes for an
/// enum value named `name`, skipping the values of `excluded`.
pub fn find_enum_value(
    model: &MetaModel,
    class: ClassRef,
    name: &str,
    excluded: Option<EnumRef>,
) -> Option<EnumValueRef> {
    let info = &model.classes[class];

    let own = info
        .enums
        .iter()
        .copied()
        .filter(|enumeration| Some(*enumeration) != excluded)
        .find_map(|enumeration| {
            model.enums[enumeration]
                .find_value(name)
                .map(|index| EnumValueRef { enumeration, index })
        });

    own.or_else(|| {
        projection(info)
            .into_iter()
            .chain(info.base_class)
            .find_map(|next| find_enum_value(model, next, name, excluded))
    })
}

pub fn find_enum_for_value(model: &MetaModel, class: ClassRef, name: &str) -> Option<EnumRef> {
    find_enum_value(model, class, name, None).map(|value| value.enumeration)
}

/// Resolves an enum type entry named `Class::Enum`.
pub fn find_enum_by_entry(
    model: &MetaModel,
    diagnostics: &mut Diagnostics,
    entry: &TypeEntry,
) -> Option<EnumRef> {
    let qualified_name = &entry.qualified_name;

    let Some((class_name, enum_name)) = qualified_name.rsplit_once("::") else {
        diagnostics.warn(
            WarningKind::UnknownEnumReference,
            format!("enum '{}' is not scoped in a class", qualified_name),
        );
        return None;
    };

    let Some(class) = find_class(model, class_name) else {
        diagnostics.warn(
            WarningKind::UnresolvedClassReference,
            format!("unknown class '{}' in '{}'", class_name, qualified_name),
        );
        return None;
    };

    let found = find_enum(model, class, enum_name);

    if found.is_none() {
        diagnostics.warn(
            WarningKind::UnknownEnumReference,
            format!("no enum '{}' in class '{}'", enum_name, class_name),
        );
    }

    found
}

/// Resolves a value reference of the form `Class::Value`.
pub fn find_enum_value_qualified(
    model: &MetaModel,
    diagnostics: &mut Diagnostics,
    name: &str,
) -> Option<EnumValueRef> {
    let found = name
        .split_once("::")
        .filter(|(_, value_name)| !value_name.contains("::"))
        .and_then(|(class_name, value_name)| {
            find_class(model, class_name)
                .and_then(|class| find_enum_value(model, class, value_name, None))
        });

    if found.is_none() {
        diagnostics.warn(
            WarningKind::UnknownEnumReference,
            format!("no matching enum '{}'", name),
        );
    }

    found
}

use arena::ArenaMap;
use meta::{Attributes, ClassRef, Field, FieldId, FieldRef, Func, FuncKind, FuncRef, MetaModel};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Accessors {
    pub getter: FuncRef,
    pub setter: Option<FuncRef>,
}

/// Getter and setter functions synthesized for fields, created on first
/// request and handed out unchanged afterwards.
///
/// The functions live in the model's function arena but are not part of any
/// class's function list.
#[derive(Clone, Debug, Default)]
pub struct FieldAccessors {
    cache: ArenaMap<FieldId, Accessors>,
}

impl FieldAccessors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn accessors(&mut self, model: &mut MetaModel, field: FieldRef) -> Accessors {
        if let Some(accessors) = self.cache.get(field) {
            return *accessors;
        }

        let info = &model.fields[field];
        let getter = getter_for(info);
        let setter = (!info.ty.is_constant).then(|| setter_for(info));

        let accessors = Accessors {
            getter: model.funcs.alloc(getter),
            setter: setter.map(|setter| model.funcs.alloc(setter)),
        };

        self.cache.insert(field, accessors);
        accessors
    }

    pub fn getter(&mut self, model: &mut MetaModel, field: FieldRef) -> FuncRef {
        self.accessors(model, field).getter
    }

    /// `None` when the field's type is constant.
    pub fn setter(&mut self, model: &mut MetaModel, field: FieldRef) -> Option<FuncRef> {
        self.accessors(model, field).setter
    }
}

/// Every field has at least a getter.
pub fn has_field_accessors(model: &MetaModel, class: ClassRef) -> bool {
    !model.classes[class].fields.is_empty()
}

fn accessor(field: &Field, name: String, kind: Attributes) -> Func {
    let mut attributes =
        Attributes::NATIVE | Attributes::FINAL | kind | field.visibility().attribute();

    if field.is_static() {
        attributes |= Attributes::STATIC;
    }

    Func::new(name, FuncKind::Normal, field.enclosing_class).with_attributes(attributes)
}

fn getter_for(field: &Field) -> Func {
    accessor(field, field.name.clone(), Attributes::GETTER_FUNCTION)
        .with_return_type(field.ty.clone())
}

fn setter_for(field: &Field) -> Func {
    accessor(
        field,
        format!("set{}", capitalized(&field.name)),
        Attributes::SETTER_FUNCTION,
    )
    .with_argument(field.name.clone(), field.ty.clone())
}

fn capitalized(name: &str) -> String {
    let mut chars = name.chars();

    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/*
    ===================  representations/meta/src/lib.rs  =====================
    The binding metamodel: classes, functions, fields and enums

    Entities live in arenas owned by `MetaModel` and refer to each other by
    index. A class owns the functions, fields and enums in its lists; base
    classes, implementors and interface sources are plain references.
    ---------------------------------------------------------------------------
*/

mod argument;
mod attributes;
mod class;
mod class_functions;
mod compare;
mod enumeration;
mod field;
mod func;
mod modifications;
mod query;
mod type_usage;
mod visibility;

use arena::{Arena, Idx, new_id_with_niche};
pub use argument::Argument;
pub use attributes::Attributes;
pub use class::Class;
pub use compare::Comparison;
pub use enumeration::{Enum, EnumValue, EnumValueRef};
pub use field::Field;
pub use func::{Func, FuncKind};
pub use query::FunctionQuery;
pub use type_usage::{TypeUsage, TypeUsageKind};
pub use visibility::Visibility;

new_id_with_niche!(ClassId, u32);
new_id_with_niche!(FuncId, u32);
new_id_with_niche!(FieldId, u32);
new_id_with_niche!(EnumId, u32);

pub type ClassRef = Idx<ClassId, Class>;
pub type FuncRef = Idx<FuncId, Func>;
pub type FieldRef = Idx<FieldId, Field>;
pub type EnumRef = Idx<EnumId, Enum>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetaModel {
    pub classes: Arena<ClassId, Class>,
    pub funcs: Arena<FuncId, Func>,
    pub fields: Arena<FieldId, Field>,
    pub enums: Arena<EnumId, Enum>,
}

impl MetaModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_class(&mut self, class: Class) -> ClassRef {
        self.classes.alloc(class)
    }

    pub fn add_field(&mut self, class: ClassRef, field: Field) -> FieldRef {
        let field_ref = self.fields.alloc(Field {
            enclosing_class: class,
            ..field
        });
        self.classes[class].fields.push(field_ref);
        field_ref
    }

    pub fn add_enum(&mut self, class: ClassRef, enumeration: Enum) -> EnumRef {
        let enum_ref = self.enums.alloc(enumeration);
        self.classes[class].enums.push(enum_ref);
        enum_ref
    }

    /// Registers `interface` in the interface list of `class` without merging
    /// any functions. The binder uses this to wire up the model.
    pub fn set_interfaces(&mut self, class: ClassRef, interfaces: Vec<ClassRef>) {
        self.classes[class].interfaces = interfaces;
    }

    /// The base-class chain of `class`, nearest first.
    pub fn ancestors(&self, class: ClassRef) -> impl Iterator<Item = ClassRef> + '_ {
        std::iter::successors(self.classes[class].base_class, |base| {
            self.classes[*base].base_class
        })
    }

    pub fn functions(&self, class: ClassRef) -> impl Iterator<Item = (FuncRef, &Func)> {
        self.classes[class]
            .functions
            .iter()
            .map(|func_ref| (*func_ref, &self.funcs[*func_ref]))
    }

    pub fn class_name(&self, class: ClassRef) -> String {
        self.classes[class].name()
    }
}

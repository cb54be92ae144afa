use crate::{EnumRef, MetaModel};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enum {
    pub name: String,
    pub values: Vec<EnumValue>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnumValue {
    pub name: String,
    pub value: i64,
}

impl Enum {
    pub fn new<N: Into<String>>(
        name: impl Into<String>,
        values: impl IntoIterator<Item = (N, i64)>,
    ) -> Self {
        Self {
            name: name.into(),
            values: values
                .into_iter()
                .map(|(name, value)| EnumValue {
                    name: name.into(),
                    value,
                })
                .collect(),
        }
    }

    pub fn find_value(&self, name: &str) -> Option<usize> {
        self.values.iter().position(|value| value.name == name)
    }
}

/// A value inside one of the model's enums.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct EnumValueRef {
    pub enumeration: EnumRef,
    pub index: usize,
}

impl EnumValueRef {
    pub fn get(self, model: &MetaModel) -> &EnumValue {
        &model.enums[self.enumeration].values[self.index]
    }
}

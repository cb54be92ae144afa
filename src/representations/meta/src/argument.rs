use crate::TypeUsage;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Argument {
    pub name: String,
    pub default_value: Option<String>,
    pub ty: TypeUsage,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: TypeUsage) -> Self {
        Self {
            name: name.into(),
            default_value: None,
            ty,
        }
    }

    pub fn with_default(mut self, expression: impl Into<String>) -> Self {
        self.default_value = Some(expression.into());
        self
    }
}

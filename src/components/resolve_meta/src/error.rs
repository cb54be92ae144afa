use derive_more::{Display, Error};

#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ResolveError {
    #[display("{class}.{first} mostly equal to {class}.{second}")]
    DuplicateFunction {
        class: String,
        first: String,
        second: String,
    },
    #[display("interface '{interface}' is already registered on '{class}'")]
    DuplicateInterface { class: String, interface: String },
    #[display("class '{class}' does not designate an interface")]
    NotAnInterfaceProjection { class: String },
}

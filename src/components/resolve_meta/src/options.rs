#[derive(Clone, Debug)]
pub struct ResolveOptions {
    /// Fail the commit of a class whose function list holds two functions
    /// with the same name and argument types.
    pub check_duplicates: bool,
    pub warn_hidden_overloads: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            check_duplicates: cfg!(debug_assertions),
            warn_hidden_overloads: true,
        }
    }
}

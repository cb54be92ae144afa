use crate::ResolveOptions;
use diagnostics::Diagnostics;
use meta::MetaModel;
use type_system::ModificationDatabase;

/// Everything a resolution step reads or writes.
pub struct ResolveCtx<'a> {
    pub model: &'a mut MetaModel,
    pub db: &'a mut dyn ModificationDatabase,
    pub diagnostics: &'a mut Diagnostics,
    pub options: ResolveOptions,
}

impl<'a> ResolveCtx<'a> {
    pub fn new(
        model: &'a mut MetaModel,
        db: &'a mut dyn ModificationDatabase,
        diagnostics: &'a mut Diagnostics,
        options: ResolveOptions,
    ) -> Self {
        Self {
            model,
            db,
            diagnostics,
            options,
        }
    }
}

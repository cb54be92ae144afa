mod accessors;
mod commit;
mod ctx;
mod error;
mod fix_functions;
mod interface;
mod lookup;
mod options;
#[cfg(test)]
mod tests;

pub use accessors::{Accessors, FieldAccessors, has_field_accessors};
pub use commit::set_functions;
pub use ctx::ResolveCtx;
pub use error::ResolveError;
pub use fix_functions::fix_functions;
pub use interface::{add_interface, extract_interface};
use itertools::Itertools;
pub use lookup::{
    find_class, find_enum, find_enum_by_entry, find_enum_for_value, find_enum_value,
    find_enum_value_qualified,
};
pub use options::ResolveOptions;

// Resolution order:
// Interface projections are extracted up front, so that every class sees its
// complete interface list once its own functions get fixed. The extracted
// interfaces are fixed along with everything else. Fixing a class fixes its
// base classes first, so iterating in arena order is enough.
pub fn resolve_model(ctx: &mut ResolveCtx) -> Result<(), ResolveError> {
    let projections = ctx
        .model
        .classes
        .keys()
        .filter(|class| {
            let info = &ctx.model.classes[*class];
            !info.is_interface() && info.designates_interface()
        })
        .collect_vec();

    for class in projections {
        extract_interface(ctx, class)?;
    }

    let classes = ctx.model.classes.keys().collect_vec();

    for class in classes {
        fix_functions(ctx, class)?;
    }

    log::debug!("resolved {} classes", ctx.model.classes.len());
    Ok(())
}

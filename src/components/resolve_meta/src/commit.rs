use crate::{ResolveCtx, ResolveError};
use diagnostics::WarningKind;
use meta::{Attributes, ClassRef, FuncRef};

/// Replaces the function list of `class` with `functions`.
///
/// The list is sorted by name. Final functions that share their name with a
/// virtual one are forced into the shell class, since the native hiding rule
/// would otherwise make them unreachable from a subclass.
pub fn set_functions(
    ctx: &mut ResolveCtx,
    class: ClassRef,
    mut functions: Vec<FuncRef>,
) -> Result<(), ResolveError> {
    for func in functions.iter() {
        ctx.model.funcs[*func].implementor = class;
    }

    ctx.model.sort_functions(&mut functions);

    let funcs = &ctx.model.funcs;
    let has_virtuals = functions.iter().any(|func| !funcs[*func].is_final());
    let has_nonpublic = functions.iter().any(|func| !funcs[*func].is_public());

    let hidden = functions
        .chunk_by(|a, b| funcs[*a].original_name == funcs[*b].original_name)
        .filter(|overloads| overloads.iter().any(|func| !funcs[*func].is_final()))
        .flat_map(|overloads| overloads.iter().copied())
        .filter(|func| funcs[*func].is_final())
        .collect::<Vec<_>>();

    let class_name = ctx.model.class_name(class);

    for func in hidden {
        let func = &mut ctx.model.funcs[func];
        func.attributes |= Attributes::FORCE_SHELL_IMPLEMENTATION;

        if ctx.options.warn_hidden_overloads {
            ctx.diagnostics.warn(
                WarningKind::HiddenOverload,
                format!("hiding of function '{}' in class '{}'", func.name, class_name),
            );
        }
    }

    if ctx.options.check_duplicates {
        check_duplicates(ctx, class, &functions)?;
    }

    let info = &mut ctx.model.classes[class];
    info.has_virtuals |= has_virtuals;
    info.has_nonpublic |= has_nonpublic;
    info.functions = functions;
    Ok(())
}

fn is_removed(ctx: &ResolveCtx, func: FuncRef) -> bool {
    let func = &ctx.model.funcs[func];

    ctx.model
        .modifications(&*ctx.db, func, func.implementor)
        .iter()
        .any(|modification| modification.is_remove_modifier())
}

fn check_duplicates(
    ctx: &ResolveCtx,
    class: ClassRef,
    functions: &[FuncRef],
) -> Result<(), ResolveError> {
    let remaining = functions
        .iter()
        .copied()
        .filter(|func| !is_removed(ctx, *func))
        .collect::<Vec<_>>();

    for (i, first) in remaining.iter().enumerate() {
        for second in remaining[i + 1..].iter() {
            let (a, b) = (&ctx.model.funcs[*first], &ctx.model.funcs[*second]);

            // Allowed by construction
            if a.is_final_overload() || b.is_final_overload() {
                continue;
            }

            if a.compare(b).is_same_signature() {
                return Err(ResolveError::DuplicateFunction {
                    class: ctx.model.classes[class].qualified_native_name().into(),
                    first: a.signature(),
                    second: b.signature(),
                });
            }
        }
    }

    Ok(())
}

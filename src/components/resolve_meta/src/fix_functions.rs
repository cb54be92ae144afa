use crate::{ResolveCtx, ResolveError, commit::set_functions};
use diagnostics::WarningKind;
use itertools::Itertools;
use meta::{Attributes, ClassRef, Comparison, Func, FuncKind, FuncRef, FunctionQuery};

#[derive(Copy, Clone, Debug)]
enum SuperSource {
    Base(ClassRef),
    Interface(ClassRef),
}

impl SuperSource {
    /// Only what the source itself implements; whatever it inherited is
    /// reached again further up the chain.
    fn candidates(self, ctx: &ResolveCtx) -> Vec<FuncRef> {
        match self {
            SuperSource::Base(base) => ctx
                .model
                .query_functions(base, FunctionQuery::CLASS_IMPLEMENTS),
            SuperSource::Interface(interface) => ctx
                .model
                .query_functions(interface, FunctionQuery::NORMAL_FUNCTIONS),
        }
    }
}

/// What to do with one super function.
enum Inherit {
    Skip,
    Copy,
    CopyUnshadowed,
}

/// Merges everything `class` inherits into its own function list.
///
/// Base classes are resolved first. Calling this again on a resolved class
/// does nothing. A class whose resolution failed stays unresolved, so it can
/// be retried once the offending modifications are fixed.
pub fn fix_functions(ctx: &mut ResolveCtx, class: ClassRef) -> Result<(), ResolveError> {
    if ctx.model.classes[class].functions_fixed {
        return Ok(());
    }

    // Marked up front so a cyclic base chain terminates.
    ctx.model.classes[class].functions_fixed = true;

    let merged = merge_inherited(ctx, class);

    if merged.is_err() {
        ctx.model.classes[class].functions_fixed = false;
    }

    merged
}

fn merge_inherited(ctx: &mut ResolveCtx, class: ClassRef) -> Result<(), ResolveError> {
    if let Some(base) = ctx.model.classes[class].base_class {
        fix_functions(ctx, base)?;
    }

    log::debug!("fixing functions of '{}'", ctx.model.class_name(class));

    let mut functions = ctx.model.classes[class].functions.clone();

    let sources = ctx
        .model
        .ancestors(class)
        .map(SuperSource::Base)
        .chain(
            ctx.model.classes[class]
                .interfaces
                .iter()
                .copied()
                .map(SuperSource::Interface),
        )
        .collect_vec();

    for source in sources {
        let mut staged = vec![];

        for super_func in source.candidates(ctx) {
            match inherit(ctx, class, &functions, super_func) {
                Inherit::Skip => (),
                Inherit::Copy => staged.push(ctx.model.copy_func(super_func, class)),
                Inherit::CopyUnshadowed => {
                    let copy = ctx.model.copy_func(super_func, class);
                    ctx.model.funcs[copy].attributes -= Attributes::FINAL_IN_TARGET;
                    staged.push(copy);
                }
            }
        }

        log::trace!("staged {} functions from {:?}", staged.len(), source);
        functions.extend(staged);
    }

    for func in functions.iter().copied() {
        apply_rename(ctx, class, func);

        if ctx.model.funcs[func].is_abstract() {
            let info = &mut ctx.model.classes[class];
            info.attributes |= Attributes::ABSTRACT;
            info.attributes -= Attributes::FINAL;
        }
    }

    mark_final_overloads(ctx, &functions);
    set_functions(ctx, class, functions)
}

fn inherit(
    ctx: &mut ResolveCtx,
    class: ClassRef,
    functions: &[FuncRef],
    super_func: FuncRef,
) -> Inherit {
    let super_func = ctx.model.funcs[super_func].clone();

    let mut add = matches!(
        super_func.kind,
        FuncKind::Normal | FuncKind::Signal | FuncKind::EmptyStub
    );
    let mut shadowed = false;

    for func in functions.iter().copied() {
        let cmp = ctx.model.funcs[func].compare(&super_func);

        if !cmp.contains(Comparison::EQUAL_NAME) {
            continue;
        }

        if cmp.contains(Comparison::EQUAL_ARGUMENTS) {
            add = false;
            reconcile(ctx, class, func, &super_func, cmp);
        } else {
            shadowed = true;
        }
    }

    if !add {
        return Inherit::Skip;
    }

    if shadowed && super_func.is_final_in_target() && !super_func.is_private() {
        ctx.diagnostics.warn(
            WarningKind::NameHidingShadow,
            format!(
                "function '{}' is shadowed by an overload in class '{}'",
                super_func.name,
                ctx.model.class_name(class)
            ),
        );
        return Inherit::CopyUnshadowed;
    }

    Inherit::Copy
}

/// Brings an override in line with the function it overrides.
fn reconcile(
    ctx: &mut ResolveCtx,
    class: ClassRef,
    func: FuncRef,
    super_func: &Func,
    cmp: Comparison,
) {
    let class_name = ctx.model.class_name(class);
    let func = &mut ctx.model.funcs[func];

    // Virtual-ness is inherited
    if !cmp.contains(Comparison::EQUAL_ATTRIBUTES) && !func.is_empty_stub() {
        if !super_func.is_final_in_native() && func.is_final_in_native() {
            func.attributes -= Attributes::FINAL_IN_NATIVE;
        }

        if !super_func.is_final_in_target() && func.is_final_in_target() {
            func.attributes -= Attributes::FINAL_IN_TARGET;
        }
    }

    if func.visibility() == super_func.visibility() {
        return;
    }

    ctx.diagnostics.warn(
        WarningKind::VisibilityConflict,
        format!(
            "visibility of function '{}' modified in class '{}'",
            func.name, class_name
        ),
    );

    if !func.is_private() && !super_func.is_private() {
        func.set_visibility(func.visibility().widest(super_func.visibility()));
    }

    // Never callable, but the native class must not stay abstract
    if func.is_private() && super_func.is_abstract() {
        func.kind = FuncKind::EmptyStub;
        func.set_visibility(super_func.visibility());
        func.attributes |= Attributes::FINAL;

        ctx.diagnostics.warn(
            WarningKind::AbstractPrivateOverride,
            format!(
                "private function '{}' in class '{}' overrides an abstract function",
                func.name, class_name
            ),
        );
    }
}

fn apply_rename(ctx: &mut ResolveCtx, class: ClassRef, func: FuncRef) {
    let renamed = ctx
        .model
        .modifications(&*ctx.db, &ctx.model.funcs[func], class)
        .into_iter()
        .find_map(|modification| modification.renamed_to().map(str::to_string));

    if let Some(name) = renamed {
        let func = &mut ctx.model.funcs[func];
        log::trace!("renaming '{}' to '{}'", func.original_name, name);
        func.name = name;
    }
}

/// Flags the final member of every name-sharing pair whose other member is
/// virtual in native code.
fn mark_final_overloads(ctx: &mut ResolveCtx, functions: &[FuncRef]) {
    let funcs = &ctx.model.funcs;

    let final_overloads = functions
        .iter()
        .copied()
        .filter(|f2| {
            funcs[*f2].is_final_in_native()
                && functions.iter().any(|f1| {
                    f1 != f2
                        && !funcs[*f1].is_final_in_native()
                        && funcs[*f1]
                            .compare(&funcs[*f2])
                            .contains(Comparison::EQUAL_NAME)
                })
        })
        .collect_vec();

    for func in final_overloads {
        ctx.model.funcs[func].attributes |= Attributes::FINAL_OVERLOAD;
    }
}

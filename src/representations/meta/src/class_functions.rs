use crate::{Attributes, ClassRef, Func, FuncKind, FuncRef, FunctionQuery, MetaModel};

impl MetaModel {
    /// Declares a function the binder found on `class`: the class is both its
    /// owner and its implementor.
    pub fn declare_function(&mut self, class: ClassRef, func: Func) -> FuncRef {
        self.add_function(
            class,
            Func {
                owner: class,
                ..func
            },
        )
    }

    /// Inserts `func` into the function list of `class`, keeping the list
    /// sorted by name.
    pub fn add_function(&mut self, class: ClassRef, func: Func) -> FuncRef {
        let func = Func {
            implementor: class,
            ..func
        };

        let is_final = func.is_final();
        let is_public = func.is_public();
        let func_ref = self.funcs.alloc(func);

        let mut functions = std::mem::take(&mut self.classes[class].functions);
        functions.push(func_ref);
        self.sort_functions(&mut functions);

        let class = &mut self.classes[class];
        class.functions = functions;
        class.has_virtuals |= !is_final;
        class.has_nonpublic |= !is_public;
        func_ref
    }

    /// Allocates a copy of `func` held by `implementor`. The copy is not
    /// inserted into any function list.
    pub fn copy_func(&mut self, func: FuncRef, implementor: ClassRef) -> FuncRef {
        let copy = self.funcs[func].copied_for(implementor);
        self.funcs.alloc(copy)
    }

    /// Stable sort by original name, so ties keep their discovery order.
    pub fn sort_functions(&self, functions: &mut [FuncRef]) {
        functions.sort_by(|a, b| {
            self.funcs[*a]
                .original_name
                .cmp(&self.funcs[*b].original_name)
        });
    }

    pub fn has_function_named(&self, class: ClassRef, name: &str) -> bool {
        self.functions(class).any(|(_, func)| func.name == name)
    }

    /// Whether `class` already holds a function with the same overridable
    /// signature as `func`.
    pub fn has_function(&self, class: ClassRef, func: &Func) -> bool {
        self.functions(class)
            .any(|(_, existing)| existing.compare(func).is_same_signature())
    }

    /// Functions of `class` sharing name and argument types with `func`.
    pub fn functions_equal_to(&self, class: ClassRef, func: &Func) -> Vec<FuncRef> {
        self.functions(class)
            .filter(|(_, existing)| existing.compare(func).is_same_signature())
            .map(|(func_ref, _)| func_ref)
            .collect()
    }

    pub fn has_constructors(&self, class: ClassRef) -> bool {
        !self
            .query_functions(class, FunctionQuery::CONSTRUCTORS)
            .is_empty()
    }

    pub fn has_signals(&self, class: ClassRef) -> bool {
        self.functions(class).any(|(_, func)| func.is_signal())
    }

    pub fn has_inconsistent_functions(&self, class: ClassRef) -> bool {
        self.functions(class).any(|(_, func)| func.is_inconsistent())
    }

    pub fn add_default_constructor(&mut self, class: ClassRef) -> FuncRef {
        let name = self.classes[class].name();
        let constructor = Func::new(name, FuncKind::Constructor, class)
            .with_attributes(Attributes::NATIVE | Attributes::PUBLIC);

        self.declare_function(class, constructor)
    }
}

#![no_std]

/*
    =======================  support/arena/src/lib.rs  ========================
    Index-based arenas for the binding metamodel

    Classes, functions, fields and enums all live in arenas and refer to each
    other through typed indices instead of pointers.
    ---------------------------------------------------------------------------
*/

mod arena;
mod id;
mod idx;
mod iter;
mod map;
mod new_id;
mod simple_type_name;

extern crate alloc;

pub use arena::Arena;
pub use id::Id;
pub use idx::Idx;
pub use iter::Iter;
pub use map::{ArenaMap, IntoRaw};
pub use new_id::NewId;

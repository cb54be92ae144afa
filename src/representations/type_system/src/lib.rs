/*
    ===============  representations/type_system/src/lib.rs  =================
    Contracts with the type system and the modification database

    Type entries are owned by the type system and shared by reference from
    every type usage. Modifications are looked up by normalized signature and
    implementing class.
    ---------------------------------------------------------------------------
*/

mod database;
mod modification;
mod signature;
mod type_entry;

pub use database::{ModificationDatabase, ModificationTable};
pub use modification::{CodeLanguage, FunctionModification, ModificationKind, RemovalScope};
pub use signature::normalize_signature;
pub use type_entry::{TypeEntry, TypeEntryKind};

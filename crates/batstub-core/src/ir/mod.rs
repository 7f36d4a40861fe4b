mod type_ref;
mod types;

pub use type_ref::TypeRef;
pub use types::*;

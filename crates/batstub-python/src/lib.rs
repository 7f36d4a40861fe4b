pub mod emitters;
pub mod generator;
pub mod naming;
pub mod type_mapper;

pub use generator::{PythonConfig, PythonStubGenerator};
pub use naming::Naming;
pub use type_mapper::map_type;

pub mod artifact;
pub mod assertions;
pub mod docstring;
pub mod stub;

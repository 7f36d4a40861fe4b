use std::fmt;

use serde::Serialize;

use super::type_ref::TypeRef;

/// A parsed method declaration: return type, name, and ordered parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Signature {
    pub name: String,
    pub return_type: TypeRef,
    pub params: Vec<Parameter>,
}

/// A single declared parameter, with the name exactly as written in the declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub param_type: TypeRef,
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}(", self.return_type, self.name)?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} {}", param.param_type, param.name)?;
        }
        f.write_str(")")
    }
}

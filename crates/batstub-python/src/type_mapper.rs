use batstub_core::ir::TypeRef;

/// Python spelling of a scalar Java type name; unknown names pass through.
fn scalar_to_python(name: &str) -> &str {
    match name {
        "String" => "str",
        "Integer" => "int",
        "Map" => "Dict",
        "boolean" | "Boolean" => "bool",
        other => other,
    }
}

/// Map a `TypeRef` to its Python annotation.
///
/// Container elements go through the scalar table only, so a nested generic
/// such as `List<Integer` (from `Map<String, List<Integer>>`) is emitted as
/// written.
pub fn type_ref_to_python(type_ref: &TypeRef) -> String {
    match type_ref {
        TypeRef::Named { name } => scalar_to_python(name).to_string(),
        TypeRef::Array { element }
        | TypeRef::List {
            element: Some(element),
        } => format!("List[{}]", scalar_to_python(element)),
        TypeRef::List { element: None } => "list".to_string(),
        TypeRef::Map { parts } => {
            if parts.is_empty() {
                return "Dict".to_string();
            }
            let parts: Vec<&str> = parts.iter().map(|p| scalar_to_python(p)).collect();
            format!("Dict[{}]", parts.join(", "))
        }
    }
}

/// Map a raw Java type token straight to its Python annotation.
pub fn map_type(token: &str) -> String {
    type_ref_to_python(&TypeRef::parse(token))
}

use std::fmt;

use serde::Serialize;

/// A type token from a declaration, classified by shape.
///
/// Element names are kept exactly as written; mapping them to a destination
/// language is the back end's job. Only one level of generics is understood:
/// the body of a container is everything between its first `<` and the first
/// `>`, so `Map<String, List<Integer>>` yields the parts `String` and
/// `List<Integer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeRef {
    /// A scalar or otherwise opaque name (`int`, `String`, `Map`).
    Named { name: String },
    /// `T[]`.
    Array { element: String },
    /// `List<T>`, or a bare `List` when `element` is `None`.
    List { element: Option<String> },
    /// `Map<K, V>`.
    Map { parts: Vec<String> },
}

impl TypeRef {
    /// Classify a raw type token. Never fails; unknown shapes become `Named`.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();

        if let Some(body) = generic_body(token, "Map") {
            let parts = body
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(String::from)
                .collect();
            return TypeRef::Map { parts };
        }

        if token == "List" {
            return TypeRef::List { element: None };
        }
        if let Some(body) = generic_body(token, "List") {
            let body = body.trim();
            let element = (!body.is_empty()).then(|| body.to_string());
            return TypeRef::List { element };
        }

        if let Some(base) = token.strip_suffix("[]") {
            return TypeRef::Array {
                element: base.trim().to_string(),
            };
        }

        TypeRef::Named {
            name: token.to_string(),
        }
    }
}

/// Body of `Container<...>`, cut at the first `>` (or the end when unclosed).
fn generic_body<'a>(token: &'a str, container: &str) -> Option<&'a str> {
    let inner = token.strip_prefix(container)?.strip_prefix('<')?;
    let end = inner.find('>').unwrap_or(inner.len());
    Some(&inner[..end])
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeRef::Named { name } => f.write_str(name),
            TypeRef::Array { element } => write!(f, "{element}[]"),
            TypeRef::List { element: None } => f.write_str("List"),
            TypeRef::List {
                element: Some(element),
            } => write!(f, "List<{element}>"),
            TypeRef::Map { parts } => write!(f, "Map<{}>", parts.join(", ")),
        }
    }
}

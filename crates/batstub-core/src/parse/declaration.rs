use log::debug;

use super::params::{is_identifier, split_parameters};
use crate::error::ParseError;
use crate::ir::{Signature, TypeRef};

/// Leading words that qualify a declaration without being part of its return type.
const MODIFIERS: &[&str] = &[
    "public",
    "protected",
    "private",
    "static",
    "final",
    "abstract",
    "synchronized",
];

/// Parse a method declaration such as `public int makes10(int a, int b) {`.
///
/// The function name is the identifier right before the first `(`, the
/// parameter list runs up to the first `)`, and the return type is whatever
/// sits between the leading modifiers and the name. Anything after the `)`
/// (a `{`, a `throws` clause) is ignored.
pub fn parse_declaration(declaration: &str) -> Result<Signature, ParseError> {
    let decl = declaration.trim();

    let open = decl
        .find('(')
        .ok_or_else(|| ParseError::malformed(decl, "missing `(`"))?;
    let close = decl[open..]
        .find(')')
        .map(|offset| open + offset)
        .ok_or_else(|| ParseError::malformed(decl, "missing `)`"))?;

    let head = decl[..open].trim_end();
    let name_start = head
        .char_indices()
        .rev()
        .take_while(|(_, c)| c.is_alphanumeric() || *c == '_')
        .last()
        .map(|(i, _)| i)
        .unwrap_or(head.len());
    let name = &head[name_start..];
    if !is_identifier(name) {
        return Err(ParseError::malformed(decl, "missing function name"));
    }

    let before_name = &head[..name_start];
    if !before_name.ends_with(char::is_whitespace) {
        return Err(ParseError::malformed(
            decl,
            "no space between return type and name",
        ));
    }

    let return_type = before_name
        .split_whitespace()
        .skip_while(|word| MODIFIERS.contains(word))
        .collect::<Vec<_>>()
        .join(" ");
    if return_type.is_empty() {
        return Err(ParseError::malformed(decl, "missing return type"));
    }

    let params = split_parameters(&decl[open + 1..close])?;

    let signature = Signature {
        name: name.to_string(),
        return_type: TypeRef::parse(&return_type),
        params,
    };
    debug!("parsed declaration `{decl}` as `{signature}`");
    Ok(signature)
}

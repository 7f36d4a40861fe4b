use crate::error::ParseError;
use crate::ir::{Parameter, TypeRef};

/// Split a raw parameter list (`"Map<String, Integer> map, int len"`) into parameters.
///
/// Commas only separate parameters when as many `>` as `<` have been seen so
/// far, so the comma inside `Map<String, Integer>` stays with its type. The
/// last character always closes the final parameter. An empty or blank list
/// yields no parameters.
pub fn split_parameters(list: &str) -> Result<Vec<Parameter>, ParseError> {
    let list = list.trim();
    let mut params = Vec::new();
    let mut opened = 0usize;
    let mut closed = 0usize;
    let mut start = 0usize;

    for (idx, ch) in list.char_indices() {
        match ch {
            '<' => opened += 1,
            '>' => closed += 1,
            _ => {}
        }

        let at_separator = ch == ',' && opened == closed;
        let at_end = idx + ch.len_utf8() == list.len();
        if at_separator || at_end {
            let end = if at_separator { idx } else { list.len() };
            params.push(parse_parameter(&list[start..end])?);
            start = idx + ch.len_utf8();
        }
    }

    Ok(params)
}

/// Parse one `"<type> <name>"` chunk, splitting on the last space.
fn parse_parameter(raw: &str) -> Result<Parameter, ParseError> {
    let trimmed = raw.trim();
    let (param_type, name) = trimmed
        .rsplit_once(' ')
        .ok_or_else(|| ParseError::MalformedParameter(trimmed.to_string()))?;
    let param_type = param_type.trim();

    if param_type.is_empty() || !is_identifier(name) {
        return Err(ParseError::MalformedParameter(trimmed.to_string()));
    }

    Ok(Parameter {
        name: name.to_string(),
        param_type: TypeRef::parse(param_type),
    })
}

pub(crate) fn is_identifier(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(params: &[Parameter]) -> Vec<&str> {
        params.iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_empty_list() {
        assert!(split_parameters("").unwrap().is_empty());
        assert!(split_parameters("   ").unwrap().is_empty());
    }

    #[test]
    fn test_single_parameter() {
        let params = split_parameters("int n").unwrap();
        assert_eq!(names(&params), ["n"]);
        assert_eq!(params[0].param_type, TypeRef::parse("int"));
    }

    #[test]
    fn test_comma_inside_generic_is_not_a_separator() {
        let params = split_parameters("Map<String, Integer> map, int len").unwrap();
        assert_eq!(names(&params), ["map", "len"]);
        assert_eq!(
            params[0].param_type,
            TypeRef::Map {
                parts: vec!["String".to_string(), "Integer".to_string()]
            }
        );
    }

    #[test]
    fn test_array_and_list_parameters() {
        let params = split_parameters("int[] nums, List<String> strings, boolean flag").unwrap();
        assert_eq!(names(&params), ["nums", "strings", "flag"]);
    }

    #[test]
    fn test_tolerates_missing_space_after_comma() {
        let params = split_parameters("int a,int b").unwrap();
        assert_eq!(names(&params), ["a", "b"]);
    }

    #[test]
    fn test_trailing_comma_closes_last_parameter() {
        let params = split_parameters("int a, int b,").unwrap();
        assert_eq!(names(&params), ["a", "b"]);
    }

    #[test]
    fn test_parameter_without_name_is_rejected() {
        let err = split_parameters("int").unwrap_err();
        assert!(matches!(err, ParseError::MalformedParameter(ref p) if p == "int"));
    }

    #[test]
    fn test_non_identifier_name_is_rejected() {
        assert!(split_parameters("int a-b").is_err());
    }
}

use batstub_core::transform::wrap;

/// Escape triple-quote sequences that would prematurely close Python docstrings.
fn escape_docstring(value: &str) -> String {
    value.replace("\"\"\"", "\\\"\\\"\\\"")
}

/// Emit the module docstring: the description wrapped at `width`, between triple quotes.
///
/// Wrapping happens on the raw text so escaping never shifts line breaks.
pub fn emit_docstring(description: &str, width: usize) -> String {
    let lines: Vec<String> = wrap(description.trim(), width)
        .iter()
        .map(|line| escape_docstring(line))
        .collect();
    format!("\"\"\"\n{}\n\"\"\"", lines.join("\n"))
}

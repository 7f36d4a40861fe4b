use batstub_core::GeneratorError;
use minijinja::{Environment, context};

/// `typing` names a stub needs, in import order.
const TYPING_NAMES: &[&str] = &["List", "Dict"];

/// The `typing` names mentioned anywhere in the rendered stub.
pub fn typing_imports(stub: &str) -> Vec<&'static str> {
    TYPING_NAMES
        .iter()
        .copied()
        .filter(|name| stub.contains(name))
        .collect()
}

/// Assemble the final file: docstring, optional `typing` import, stub, and guard block.
pub fn emit_artifact(
    docstring: &str,
    stub: &str,
    assertions: &str,
) -> Result<String, GeneratorError> {
    let mut env = Environment::new();
    env.set_keep_trailing_newline(true);
    env.add_template("artifact.py.j2", include_str!("../../templates/artifact.py.j2"))
        .map_err(|e| GeneratorError::Render(e.to_string()))?;
    let tmpl = env
        .get_template("artifact.py.j2")
        .map_err(|e| GeneratorError::Render(e.to_string()))?;

    tmpl.render(context! {
        docstring => docstring,
        imports => typing_imports(stub),
        stub => stub,
        assertions => assertions,
    })
    .map_err(|e| GeneratorError::Render(e.to_string()))
}

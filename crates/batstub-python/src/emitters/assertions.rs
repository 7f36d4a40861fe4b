use batstub_core::GeneratorError;
use minijinja::{Environment, context};

/// Textual substitutions from an example line to a Python expression.
const SUBSTITUTIONS: &[(&str, &str)] = &[("→", "=="), ("true", "True"), ("false", "False")];

/// Rewrite one example (`isOdd(3) → true`) as a Python expression (`isOdd(3) == True`).
///
/// This is plain text substitution; the call expression is not parsed.
pub fn convert_example(example: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(example.to_string(), |acc, (from, to)| acc.replace(from, to))
}

/// Emit the `if __name__ == '__main__':` block with one `assert` per example, in order.
pub fn emit_assertions(examples: &[String]) -> Result<String, GeneratorError> {
    let mut env = Environment::new();
    env.add_template("guard.py.j2", include_str!("../../templates/guard.py.j2"))
        .map_err(|e| GeneratorError::Render(e.to_string()))?;
    let tmpl = env
        .get_template("guard.py.j2")
        .map_err(|e| GeneratorError::Render(e.to_string()))?;

    let assertions: Vec<String> = examples.iter().map(|e| convert_example(e)).collect();

    tmpl.render(context! { assertions => assertions })
        .map_err(|e| GeneratorError::Render(e.to_string()))
}

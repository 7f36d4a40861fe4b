use batstub_core::GeneratorError;
use batstub_core::ir::{Parameter, Signature};
use minijinja::{Environment, context};

use crate::naming::Naming;
use crate::type_mapper::type_ref_to_python;

/// Render parameters as `name: annotation`, applying the rename policy.
pub fn render_params(params: &[Parameter], naming: &Naming) -> Vec<String> {
    params
        .iter()
        .map(|p| {
            format!(
                "{}: {}",
                naming.parameter_name(&p.name),
                type_ref_to_python(&p.param_type)
            )
        })
        .collect()
}

/// Emit the `def` stub with a `pass` body.
pub fn emit_stub(sig: &Signature, naming: &Naming) -> Result<String, GeneratorError> {
    let mut env = Environment::new();
    env.add_template("stub.py.j2", include_str!("../../templates/stub.py.j2"))
        .map_err(|e| GeneratorError::Render(e.to_string()))?;
    let tmpl = env
        .get_template("stub.py.j2")
        .map_err(|e| GeneratorError::Render(e.to_string()))?;

    tmpl.render(context! {
        name => sig.name.clone(),
        params => render_params(&sig.params, naming),
        return_type => type_ref_to_python(&sig.return_type),
    })
    .map_err(|e| GeneratorError::Render(e.to_string()))
}

#[cfg(test)]
mod tests {
    use batstub_core::parse::{parse_declaration, split_parameters};

    use super::*;

    fn python_params(list: &str) -> Vec<String> {
        render_params(&split_parameters(list).unwrap(), &Naming::default())
    }

    #[test]
    fn test_python_params_with_renames() {
        let params = python_params("Map<String, Integer> map, int len");
        assert_eq!(params, ["mapping: Dict[str, int]", "length: int"]);
    }

    #[test]
    fn test_python_params_empty() {
        assert!(python_params("").is_empty());
    }

    #[test]
    fn test_emit_stub() {
        let sig = parse_declaration("public String frontBack(String str) {").unwrap();
        let stub = emit_stub(&sig, &Naming::default()).unwrap();
        assert_eq!(stub, "def frontBack(string: str) -> str:\n    pass");
    }

    #[test]
    fn test_emit_stub_without_parameters() {
        let sig = parse_declaration("public int answer() {").unwrap();
        let stub = emit_stub(&sig, &Naming::default()).unwrap();
        assert_eq!(stub, "def answer() -> int:\n    pass");
    }

    #[test]
    fn test_emit_stub_with_containers() {
        let sig =
            parse_declaration("public Map<String, Integer> wordLen(String[] strings) {").unwrap();
        let stub = emit_stub(&sig, &Naming::default()).unwrap();
        insta::assert_snapshot!(stub, @r"
        def wordLen(strings: List[str]) -> Dict[str, int]:
            pass
        ");
    }

    #[test]
    fn test_emit_stub_is_deterministic() {
        let sig = parse_declaration("public int[] fix45(int[] nums) {").unwrap();
        let naming = Naming::default();
        assert_eq!(
            emit_stub(&sig, &naming).unwrap(),
            emit_stub(&sig, &naming).unwrap()
        );
    }
}

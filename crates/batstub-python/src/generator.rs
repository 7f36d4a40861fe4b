use batstub_core::catalog::ProblemPage;
use batstub_core::config::BatConfig;
use batstub_core::parse::parse_declaration;
use batstub_core::transform::DEFAULT_WRAP_WIDTH;
use batstub_core::{GeneratedFile, GeneratorError, StubGenerator};
use log::debug;

use crate::emitters;
use crate::naming::Naming;

/// Settings for the Python back end.
#[derive(Debug, Clone)]
pub struct PythonConfig {
    pub wrap_width: usize,
    pub naming: Naming,
}

impl Default for PythonConfig {
    fn default() -> Self {
        Self {
            wrap_width: DEFAULT_WRAP_WIDTH,
            naming: Naming::default(),
        }
    }
}

impl From<&BatConfig> for PythonConfig {
    fn from(config: &BatConfig) -> Self {
        Self {
            wrap_width: config.docstring.width,
            naming: Naming::new(&config.naming.aliases),
        }
    }
}

/// Python stub generator: one `<problem>.py` per problem page.
pub struct PythonStubGenerator;

impl PythonStubGenerator {
    /// Render the full file content for one page.
    pub fn render(problem: &ProblemPage, config: &PythonConfig) -> Result<String, GeneratorError> {
        let signature = parse_declaration(&problem.declaration)?;
        let stub = emitters::stub::emit_stub(&signature, &config.naming)?;
        let assertions = emitters::assertions::emit_assertions(&problem.examples)?;
        let docstring = emitters::docstring::emit_docstring(&problem.description, config.wrap_width);
        emitters::artifact::emit_artifact(&docstring, &stub, &assertions)
    }
}

impl StubGenerator for PythonStubGenerator {
    type Config = PythonConfig;

    fn generate(
        &self,
        problem: &ProblemPage,
        config: &PythonConfig,
    ) -> Result<GeneratedFile, GeneratorError> {
        let content = Self::render(problem, config)?;
        debug!("rendered {} ({} bytes)", problem.name, content.len());
        Ok(GeneratedFile {
            path: format!("{}.py", problem.name),
            content,
        })
    }
}

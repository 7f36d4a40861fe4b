pub mod catalog;
pub mod config;
pub mod error;
pub mod generate;
pub mod ir;
pub mod parse;
pub mod transform;

pub use error::{ConfigError, GeneratorError, ParseError};

/// A generated file with path and content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// Trait for back ends that turn one problem page into one stub file.
///
/// Implementations must be pure: the same page and config always produce the
/// same file, so problems can be generated in any order or in parallel.
pub trait StubGenerator {
    type Config;

    fn generate(
        &self,
        problem: &catalog::ProblemPage,
        config: &Self::Config,
    ) -> Result<GeneratedFile, GeneratorError>;
}

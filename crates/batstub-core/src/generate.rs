use log::{debug, info, warn};

use crate::catalog::{Catalog, Category};
use crate::error::GeneratorError;
use crate::{GeneratedFile, StubGenerator};

/// A category whose problems have all been through the generator.
///
/// Only processed categories can be written, so there is no way to persist a
/// category before its stubs exist.
#[derive(Debug, Clone)]
pub struct ProcessedCategory {
    pub name: String,
    pub files: Vec<GeneratedFile>,
    pub failures: Vec<ProblemFailure>,
}

/// A problem that was skipped because its page could not be converted.
#[derive(Debug, Clone)]
pub struct ProblemFailure {
    pub problem: String,
    pub error: String,
}

/// Run `generator` over one category.
///
/// With `strict`, the first failing problem aborts the category. Otherwise
/// failures are logged, recorded, and skipped.
pub fn generate_category<G: StubGenerator>(
    generator: &G,
    category: &Category,
    config: &G::Config,
    strict: bool,
) -> Result<ProcessedCategory, GeneratorError> {
    let mut files = Vec::with_capacity(category.problems.len());
    let mut failures = Vec::new();

    for problem in &category.problems {
        match generator.generate(problem, config) {
            Ok(file) => {
                debug!("{}: generated {}", category.name, file.path);
                files.push(file);
            }
            Err(e) if strict => return Err(e),
            Err(e) => {
                warn!("{}: skipping {}: {e}", category.name, problem.name);
                failures.push(ProblemFailure {
                    problem: problem.name.clone(),
                    error: e.to_string(),
                });
            }
        }
    }

    info!(
        "{}: {} generated, {} skipped",
        category.name,
        files.len(),
        failures.len()
    );

    Ok(ProcessedCategory {
        name: category.name.clone(),
        files,
        failures,
    })
}

/// Run `generator` over every category of the catalog, in order.
pub fn generate_catalog<G: StubGenerator>(
    generator: &G,
    catalog: &Catalog,
    config: &G::Config,
    strict: bool,
) -> Result<Vec<ProcessedCategory>, GeneratorError> {
    catalog
        .categories
        .iter()
        .map(|category| generate_category(generator, category, config, strict))
        .collect()
}

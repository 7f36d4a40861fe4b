//! Problem pages as handed over by whatever extracted them from the site.
//!
//! The catalog is plain data: one declaration, description, and example list
//! per problem, grouped into named categories. Loading it from a manifest
//! file is the only I/O this module does.

mod source;

pub use source::{ManifestSource, ProblemSource};

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;

/// One problem page's extracted fragments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProblemPage {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Raw declaration text, e.g. `public int makes10(int a, int b) {`.
    pub declaration: String,

    #[serde(default)]
    pub description: String,

    /// Examples in order, each of the form `call(args) → result`.
    #[serde(default)]
    pub examples: Vec<String>,
}

/// A named group of problems, written to its own directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub problems: Vec<ProblemPage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Catalog {
    pub categories: Vec<Category>,
}

impl Catalog {
    pub fn problem_count(&self) -> usize {
        self.categories.iter().map(|c| c.problems.len()).sum()
    }
}

#[derive(Deserialize)]
struct RawCatalog {
    #[serde(default)]
    categories: Vec<RawCategory>,
}

#[derive(Deserialize)]
struct RawCategory {
    name: Option<String>,
    url: Option<String>,
    #[serde(default)]
    problems: Vec<ProblemPage>,
}

/// Parse a catalog manifest from YAML.
pub fn from_yaml(input: &str) -> Result<Catalog, ParseError> {
    let raw: RawCatalog = serde_yaml_ng::from_str(input)?;
    resolve(raw)
}

/// Parse a catalog manifest from JSON.
pub fn from_json(input: &str) -> Result<Catalog, ParseError> {
    let raw: RawCatalog = serde_json::from_str(input)?;
    resolve(raw)
}

/// Derive a category name from the last path segment of its URL.
///
/// `https://codingbat.com/java/Warmup-1` → `Warmup-1`. Returns `None` when the
/// URL does not end in a segment made of word characters and dashes.
pub fn category_name_from_url(url: &str) -> Option<String> {
    let (_, segment) = url.rsplit_once('/')?;
    is_safe_name(segment).then(|| segment.to_string())
}

/// Names become directory and file names, so only word characters and dashes
/// are accepted.
fn is_safe_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '_' || c == '-')
}

fn resolve(raw: RawCatalog) -> Result<Catalog, ParseError> {
    let mut seen = HashSet::new();
    let mut categories = Vec::with_capacity(raw.categories.len());

    for (i, cat) in raw.categories.into_iter().enumerate() {
        let name = match (cat.name, cat.url.as_deref()) {
            (Some(name), _) if is_safe_name(&name) => name,
            (Some(name), _) => {
                return Err(ParseError::InvalidName(format!("category `{name}`")));
            }
            (None, Some(url)) => category_name_from_url(url).ok_or_else(|| {
                ParseError::MissingField(format!("categories[{i}].name (cannot derive from {url})"))
            })?,
            (None, None) => {
                return Err(ParseError::MissingField(format!("categories[{i}].name")));
            }
        };

        if !seen.insert(name.clone()) {
            return Err(ParseError::DuplicateName(format!("category {name}")));
        }

        let mut problem_names = HashSet::new();
        for problem in &cat.problems {
            if problem.name.trim().is_empty() {
                return Err(ParseError::MissingField(format!("{name}: problem name")));
            }
            if !is_safe_name(&problem.name) {
                return Err(ParseError::InvalidName(format!("{name}/{}", problem.name)));
            }
            if !problem_names.insert(problem.name.as_str()) {
                return Err(ParseError::DuplicateName(format!("{name}/{}", problem.name)));
            }
        }

        categories.push(Category {
            name,
            url: cat.url,
            problems: cat.problems,
        });
    }

    Ok(Catalog { categories })
}

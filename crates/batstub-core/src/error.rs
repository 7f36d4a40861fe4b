use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("malformed signature `{declaration}`: {reason}")]
    MalformedSignature {
        declaration: String,
        reason: &'static str,
    },

    #[error("malformed parameter: `{0}`")]
    MalformedParameter(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("missing required field: {0}")]
    MissingField(String),

    #[error("duplicate name: {0}")]
    DuplicateName(String),

    #[error("invalid name {0}: only letters, digits, `_` and `-` are allowed")]
    InvalidName(String),
}

impl ParseError {
    pub(crate) fn malformed(declaration: &str, reason: &'static str) -> Self {
        ParseError::MalformedSignature {
            declaration: declaration.to_string(),
            reason,
        }
    }
}

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("template render failed: {0}")]
    Render(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("invalid config {path}: {reason}")]
    Invalid { path: PathBuf, reason: &'static str },
}

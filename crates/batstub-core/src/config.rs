use std::fs;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::error::ConfigError;
use crate::transform::DEFAULT_WRAP_WIDTH;

/// Top-level project configuration loaded from `.batstub.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatConfig {
    /// Catalog manifest to read problems from.
    pub input: String,
    /// Root directory that receives one folder per category.
    pub output: String,
    pub docstring: DocstringConfig,
    pub naming: NamingConfig,
    /// Replace stubs that already exist on disk.
    pub overwrite: bool,
    /// Abort on the first problem that fails to convert instead of skipping it.
    pub strict: bool,
}

impl Default for BatConfig {
    fn default() -> Self {
        Self {
            input: "problems.yaml".to_string(),
            output: ".".to_string(),
            docstring: DocstringConfig::default(),
            naming: NamingConfig::default(),
            overwrite: true,
            strict: false,
        }
    }
}

/// Docstring layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DocstringConfig {
    pub width: usize,
}

impl Default for DocstringConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WRAP_WIDTH,
        }
    }
}

/// Parameter renaming.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Map from a parameter name as declared to the name used in the stub.
    /// Entries replace the built-in renames for the same name.
    pub aliases: IndexMap<String, String>,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".batstub.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<BatConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: BatConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    if config.docstring.width == 0 {
        return Err(ConfigError::Invalid {
            path: path.to_path_buf(),
            reason: "docstring.width must be at least 1",
        });
    }
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# batstub configuration
input: problems.yaml    # catalog manifest (.yaml or .json)
output: .               # one directory per category is created here

docstring:
  width: 81             # wrap descriptions after this many characters

naming:
  aliases: {}
    # list: items       # parameter name as declared → name in the stub

overwrite: true         # replace stubs that already exist
strict: false           # stop at the first declaration that fails to parse
"#
}

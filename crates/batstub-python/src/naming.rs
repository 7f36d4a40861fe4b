use indexmap::IndexMap;

/// Parameter names that would shadow a Python builtin, and their replacements.
const BUILTIN_ALIASES: &[(&str, &str)] = &[("str", "string"), ("len", "length"), ("map", "mapping")];

/// Parameter renaming policy for generated stubs.
#[derive(Debug, Clone)]
pub struct Naming {
    aliases: IndexMap<String, String>,
}

impl Naming {
    /// Built-in renames with `extra` layered on top; an extra entry for the
    /// same declared name wins.
    pub fn new(extra: &IndexMap<String, String>) -> Self {
        let mut aliases: IndexMap<String, String> = BUILTIN_ALIASES
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect();
        aliases.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self { aliases }
    }

    /// The name to use in the stub for a parameter declared as `declared`.
    pub fn parameter_name<'a>(&'a self, declared: &'a str) -> &'a str {
        self.aliases
            .get(declared)
            .map(String::as_str)
            .unwrap_or(declared)
    }
}

impl Default for Naming {
    fn default() -> Self {
        Self::new(&IndexMap::new())
    }
}

use std::collections::HashMap;

/// Case-sensitive snapshot of environment variables.
///
/// Built from `(key, value)` pairs so tests can pass synthetic data instead of
/// `std::env::vars()`. A missing key and an empty value are the same thing:
/// both mean "not provided".
#[derive(Debug, Clone, Default)]
pub struct EnvVars {
    vars: HashMap<String, String>,
}

impl EnvVars {
    pub fn new(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        Self {
            vars: vars.into_iter().collect(),
        }
    }

    /// Value for `key`, or `""` when unset.
    pub fn get(&self, key: &str) -> &str {
        self.vars.get(key).map(String::as_str).unwrap_or_default()
    }
}

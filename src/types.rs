use serde::Serialize;

/// Structural metadata for one leaf field.
///
/// All keys are optional. An empty default counts as "no default", and
/// explicit `env` / `flag` names bypass the path-derived ones.
///
/// ```
/// use flagfig::Tags;
///
/// let tags = Tags::new().default("8080").env("PORT").required();
/// assert_eq!(tags.default_value(), "8080");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tags {
    default: String,
    required: bool,
    env: Option<String>,
    flag: Option<String>,
    help: Option<String>,
}

impl Tags {
    pub fn new() -> Self {
        <Self as Default>::default()
    }

    /// Lowest-priority source string for the field.
    pub fn default(mut self, value: &str) -> Self {
        self.default = value.to_string();
        self
    }

    /// Fail resolution unless a flag, env var or default supplies a value.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Read this env var instead of the derived `PREFIX_PATH_FIELD` name.
    /// An empty name is ignored and the derived one is used.
    pub fn env(mut self, name: &str) -> Self {
        self.env = Some(name.to_string());
        self
    }

    /// Use `--name` instead of the derived `path-field` flag.
    /// An empty name is ignored and the derived one is used.
    pub fn flag(mut self, name: &str) -> Self {
        self.flag = Some(name.to_string());
        self
    }

    /// Usage text shown in `--help`.
    pub fn help(mut self, text: &str) -> Self {
        self.help = Some(text.to_string());
        self
    }

    /// Declared default, `""` when none.
    pub fn default_value(&self) -> &str {
        &self.default
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn env_override(&self) -> Option<&str> {
        self.env.as_deref().filter(|s| !s.is_empty())
    }

    pub fn flag_override(&self) -> Option<&str> {
        self.flag.as_deref().filter(|s| !s.is_empty())
    }

    pub fn help_text(&self) -> Option<&str> {
        self.help.as_deref()
    }
}

/// Which layer supplied a field's final value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// `--flag` on the input tokens.
    Flag,
    /// Environment variable.
    Env,
    /// `Tags::default`.
    Default,
    /// Nothing applied; the field holds its type's zero value.
    Zero,
}

use crate::error::FlagfigError;
use crate::ops::Resolution;
use crate::resolve::{self, ResolveInput};
use crate::walk::Configure;

/// Entry point for resolving a flagfig configuration.
pub struct Flagfig;

impl Flagfig {
    pub fn builder() -> FlagfigBuilder {
        FlagfigBuilder::new()
    }

    /// Resolve `config` from the process arguments and environment, deriving
    /// env var names under `app_prefix`.
    ///
    /// Shorthand for `Flagfig::builder().app_prefix(app_prefix).resolve(config)`.
    pub fn resolve<C: Configure + ?Sized>(
        config: &mut C,
        app_prefix: &str,
    ) -> Result<Resolution, FlagfigError> {
        Self::builder().app_prefix(app_prefix).resolve(config)
    }
}

/// Builder for one resolution pass.
///
/// By default the pass reads the process arguments (minus the binary name)
/// and the process environment. Both can be replaced with synthetic data,
/// which is how tests and embedders drive it.
#[derive(Debug, Clone, Default)]
pub struct FlagfigBuilder {
    app_prefix: String,
    command_name: Option<String>,
    args: Option<Vec<String>>,
    env_vars: Option<Vec<(String, String)>>,
    env_enabled: bool,
}

impl FlagfigBuilder {
    fn new() -> Self {
        Self {
            env_enabled: true,
            ..Self::default()
        }
    }

    /// Set the prefix for derived env var names (`myapp` → `MYAPP_PORT`).
    /// Empty by default, meaning env names are the bare field path.
    pub fn app_prefix(mut self, prefix: &str) -> Self {
        self.app_prefix = prefix.to_string();
        self
    }

    /// Program name shown in `--help` (default: the app prefix).
    pub fn command_name(mut self, name: &str) -> Self {
        self.command_name = Some(name.to_string());
        self
    }

    /// Use these input tokens instead of the process arguments. The binary
    /// name must not be included.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args = Some(args.into_iter().map(Into::into).collect());
        self
    }

    /// Use these `(name, value)` pairs instead of the process environment.
    pub fn env_vars<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.env_vars = Some(
            vars.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        );
        self
    }

    /// Ignore the environment entirely: every field falls back to its
    /// default or zero value unless a flag is given.
    pub fn no_env(mut self) -> Self {
        self.env_enabled = false;
        self
    }

    fn effective_command_name(&self) -> String {
        self.command_name
            .clone()
            .unwrap_or_else(|| self.app_prefix.clone())
    }

    fn effective_env_vars(&self) -> Vec<(String, String)> {
        if !self.env_enabled {
            return Vec::new();
        }
        match &self.env_vars {
            Some(vars) => vars.clone(),
            None => std::env::vars().collect(),
        }
    }

    fn effective_args(&self) -> Vec<String> {
        match &self.args {
            Some(args) => args.clone(),
            None => std::env::args().skip(1).collect(),
        }
    }

    /// Build the `ResolveInput` from current builder state.
    fn build_input(&self) -> ResolveInput {
        ResolveInput {
            app_prefix: self.app_prefix.clone(),
            command_name: self.effective_command_name(),
            args: self.effective_args(),
            env_vars: self.effective_env_vars(),
        }
    }

    /// Resolve `config` in place: flags over environment over tag defaults.
    pub fn resolve<C: Configure + ?Sized>(
        self,
        config: &mut C,
    ) -> Result<Resolution, FlagfigError> {
        resolve::resolve(Some(config), self.build_input())
    }
}

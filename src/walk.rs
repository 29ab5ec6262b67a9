//! Structural walk: visit every field of a config aggregate, derive its names,
//! pick its layered value and register a typed setter for it.

use std::any::Any;
use std::collections::HashSet;

use tracing::debug;

use crate::cli::FlagSpec;
use crate::env::EnvVars;
use crate::error::FlagfigError;
use crate::names;
use crate::setter::{self, Setter};
use crate::types::{Source, Tags};

/// Schema of a config aggregate.
///
/// Implementations visit their fields in declaration order: leaves through
/// [`Walker::leaf`], nested aggregates through [`Walker::nested`].
///
/// ```
/// use flagfig::{Configure, FlagfigError, Tags, Walker};
///
/// #[derive(Default)]
/// struct Server {
///     host: String,
///     port: u32,
/// }
///
/// impl Configure for Server {
///     fn configure<'a>(&'a mut self, walker: &mut Walker<'a>) -> Result<(), FlagfigError> {
///         walker.leaf("host", Tags::new().default("localhost"), &mut self.host)?;
///         walker.leaf("port", Tags::new().default("8080"), &mut self.port)
///     }
/// }
/// ```
pub trait Configure {
    fn configure<'a>(&'a mut self, walker: &mut Walker<'a>) -> Result<(), FlagfigError>;
}

/// Where a leaf's value lives.
///
/// A field handed over by shared reference is part of the schema but can not
/// be written; registering it fails with [`FlagfigError::UnsettableField`].
pub enum Slot<'a, T> {
    Writable(&'a mut T),
    ReadOnly(&'a T),
}

/// Conversion from `&mut T` / `&T` into a [`Slot`].
pub trait IntoSlot<'a> {
    type Target: Any;

    fn into_slot(self) -> Slot<'a, Self::Target>;
}

impl<'a, T: Any> IntoSlot<'a> for &'a mut T {
    type Target = T;

    fn into_slot(self) -> Slot<'a, T> {
        Slot::Writable(self)
    }
}

impl<'a, T: Any> IntoSlot<'a> for &'a T {
    type Target = T;

    fn into_slot(self) -> Slot<'a, T> {
        Slot::ReadOnly(self)
    }
}

/// A registered leaf: its setter plus everything the later phases and the
/// report need.
pub(crate) struct Entry<'a> {
    pub setter: Box<dyn Setter + 'a>,
    pub path: String,
    pub env: String,
    pub source: Source,
    pub required: bool,
    pub help: Option<String>,
}

/// Required fields in registration order, each with a "satisfied" mark.
#[derive(Debug, Default)]
pub(crate) struct RequiredSet {
    entries: Vec<(String, bool)>,
}

impl RequiredSet {
    /// Track `flag`, already satisfied when the walk found a value for it.
    pub fn insert(&mut self, flag: &str, satisfied: bool) {
        self.entries.push((flag.to_string(), satisfied));
    }

    /// Mark `flag` as supplied on the command line.
    pub fn satisfy(&mut self, flag: &str) {
        for (name, satisfied) in &mut self.entries {
            if name == flag {
                *satisfied = true;
            }
        }
    }

    /// First required flag nothing supplied.
    pub fn first_missing(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|(_, satisfied)| !satisfied)
            .map(|(name, _)| name.as_str())
    }
}

/// Visitor handed to [`Configure::configure`].
///
/// Holds the resolution context for one pass: the app prefix, the
/// environment snapshot, the current structural path and everything
/// registered so far.
pub struct Walker<'a> {
    app_prefix: String,
    env: EnvVars,
    path: Vec<String>,
    flag_names: HashSet<String>,
    env_names: HashSet<String>,
    pub(crate) entries: Vec<Entry<'a>>,
    pub(crate) required: RequiredSet,
}

impl<'a> Walker<'a> {
    pub(crate) fn new(app_prefix: &str, env: EnvVars) -> Self {
        Self {
            app_prefix: app_prefix.to_string(),
            env,
            path: Vec::new(),
            flag_names: HashSet::new(),
            env_names: HashSet::new(),
            entries: Vec::new(),
            required: RequiredSet::default(),
        }
    }

    /// Register a leaf field.
    ///
    /// The field gets its effective value right away: the environment value
    /// if set, else the tag default, else the type's zero value. A flag given
    /// on the input tokens overrides it later.
    pub fn leaf<S: IntoSlot<'a>>(
        &mut self,
        name: &str,
        tags: Tags,
        slot: S,
    ) -> Result<(), FlagfigError> {
        let mut path = self.path.clone();
        path.push(name.to_string());
        let dotted = names::dotted(&path);

        let dest = match slot.into_slot() {
            Slot::Writable(dest) => dest,
            Slot::ReadOnly(_) => return Err(FlagfigError::UnsettableField { field: dotted }),
        };

        let flag = names::flag_name(&tags, &path);
        let env = names::env_name(&tags, &self.app_prefix, &path);
        if !self.flag_names.insert(flag.clone()) {
            return Err(FlagfigError::DuplicateName { name: flag });
        }
        if !self.env_names.insert(env.clone()) {
            return Err(FlagfigError::DuplicateName { name: env });
        }

        let env_value = self.env.get(&env);
        let (effective, source) = if !env_value.is_empty() {
            (env_value, Source::Env)
        } else if !tags.default_value().is_empty() {
            (tags.default_value(), Source::Default)
        } else {
            ("", Source::Zero)
        };

        if tags.is_required() {
            self.required.insert(&flag, source != Source::Zero);
        }

        let setter = setter::bind(&dotted, dest, &flag, effective)?;
        debug!(
            event = "flagfig.walk.leaf_registered",
            field = %dotted,
            flag = %flag,
            env = %env,
            source = ?source,
            type_name = %setter.type_name(),
        );

        self.entries.push(Entry {
            setter,
            path: dotted,
            env,
            source,
            required: tags.is_required(),
            help: tags.help_text().map(str::to_string),
        });
        Ok(())
    }

    /// Recurse into a nested aggregate. `name` becomes part of the derived
    /// names of every leaf below it.
    pub fn nested<C: Configure + ?Sized>(
        &mut self,
        name: &str,
        inner: &'a mut C,
    ) -> Result<(), FlagfigError> {
        self.path.push(name.to_string());
        let result = inner.configure(self);
        self.path.pop();
        result
    }

    /// Flag descriptions for the parse phase.
    pub(crate) fn flag_specs(&self) -> Vec<FlagSpec> {
        self.entries
            .iter()
            .map(|entry| FlagSpec {
                name: entry.setter.name().to_string(),
                type_name: entry.setter.type_name(),
                env: entry.env.clone(),
                switch: entry.setter.is_switch(),
                help: entry.help.clone(),
                current: entry.setter.serialize(),
            })
            .collect()
    }

    /// Apply one flag value given on the command line.
    pub(crate) fn apply_flag(&mut self, flag: &str, raw: &str) -> Result<(), FlagfigError> {
        let Some(entry) = self.entries.iter_mut().find(|e| e.setter.name() == flag) else {
            return Ok(());
        };
        entry.setter.set(raw)?;
        entry.source = Source::Flag;
        self.required.satisfy(flag);
        debug!(event = "flagfig.walk.flag_applied", flag = %flag, value = %raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::test::{Outer, TestConfig};

    fn walker<'a>(prefix: &str, pairs: &[(&str, &str)]) -> Walker<'a> {
        let env = EnvVars::new(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())));
        Walker::new(prefix, env)
    }

    #[test]
    fn leaves_registered_in_declaration_order() {
        let mut config = TestConfig::default();
        let mut w = walker("myapp", &[]);
        config.configure(&mut w).unwrap();
        let flags: Vec<&str> = w.entries.iter().map(|e| e.setter.name()).collect();
        assert_eq!(
            flags,
            vec!["host", "port", "debug", "database-url", "database-pool_size"]
        );
        let envs: Vec<&str> = w.entries.iter().map(|e| e.env.as_str()).collect();
        assert_eq!(envs[3], "MYAPP_DATABASE_URL");
    }

    #[test]
    fn default_applied_during_walk() {
        let mut config = TestConfig::default();
        {
            let mut w = walker("myapp", &[]);
            config.configure(&mut w).unwrap();
            assert_eq!(w.entries[0].source, Source::Default);
            assert_eq!(w.entries[3].source, Source::Zero);
        }
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn env_beats_default_during_walk() {
        let mut config = TestConfig::default();
        {
            let mut w = walker("myapp", &[("MYAPP_PORT", "5000")]);
            config.configure(&mut w).unwrap();
            assert_eq!(w.entries[1].source, Source::Env);
        }
        assert_eq!(config.port, 5000);
    }

    #[test]
    fn nested_path_prefixes_names() {
        let mut config = Outer::default();
        let mut w = walker("", &[]);
        config.configure(&mut w).unwrap();
        assert_eq!(w.entries[0].setter.name(), "struct-value");
        assert_eq!(w.entries[0].env, "STRUCT_VALUE");
        assert_eq!(w.entries[0].path, "Struct.Value");
    }

    #[test]
    fn path_is_restored_after_nested() {
        let mut config = TestConfig::default();
        let mut w = walker("", &[]);
        config.configure(&mut w).unwrap();
        assert!(w.path.is_empty());
    }

    #[test]
    fn required_set_tracks_first_missing() {
        let mut set = RequiredSet::default();
        set.insert("a", true);
        set.insert("b", false);
        set.insert("c", false);
        assert_eq!(set.first_missing(), Some("b"));
        set.satisfy("b");
        assert_eq!(set.first_missing(), Some("c"));
        set.satisfy("c");
        assert_eq!(set.first_missing(), None);
    }

    #[test]
    fn read_only_leaf_is_unsettable() {
        struct Locked {
            value: i64,
        }
        impl Configure for Locked {
            fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
                w.leaf("value", Tags::new(), &self.value)
            }
        }
        let mut config = Locked { value: 1 };
        let mut w = walker("", &[]);
        let err = config.configure(&mut w).unwrap_err();
        assert!(matches!(err, FlagfigError::UnsettableField { field } if field == "value"));
    }

    #[test]
    fn duplicate_flag_name_rejected() {
        struct Twice {
            a: i64,
            b: i64,
        }
        impl Configure for Twice {
            fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
                w.leaf("a", Tags::new().flag("same"), &mut self.a)?;
                w.leaf("b", Tags::new().flag("same"), &mut self.b)
            }
        }
        let mut config = Twice { a: 0, b: 0 };
        let mut w = walker("", &[]);
        let err = config.configure(&mut w).unwrap_err();
        assert!(matches!(err, FlagfigError::DuplicateName { name } if name == "same"));
    }

    #[test]
    fn duplicate_env_name_rejected() {
        struct Shared {
            a: String,
            b: String,
        }
        impl Configure for Shared {
            fn configure<'a>(&'a mut self, w: &mut Walker<'a>) -> Result<(), FlagfigError> {
                w.leaf("a", Tags::new().env("TOKEN"), &mut self.a)?;
                w.leaf("b", Tags::new().env("TOKEN"), &mut self.b)
            }
        }
        let mut config = Shared {
            a: String::new(),
            b: String::new(),
        };
        let mut w = walker("", &[]);
        let err = config.configure(&mut w).unwrap_err();
        assert!(matches!(err, FlagfigError::DuplicateName { name } if name == "TOKEN"));
    }
}

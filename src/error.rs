use thiserror::Error;

#[derive(Debug, Error)]
pub enum FlagfigError {
    #[error("Resolve target must be a mutable reference to a config struct")]
    InvalidReceiver,

    #[error("Field '{field}' can not be set (registered without a mutable reference)")]
    UnsettableField { field: String },

    #[error("Unsupported type [{type_name}] for field '{field}'")]
    UnsupportedType { field: String, type_name: String },

    #[error("Cannot use [{value}] as type [{type_name}] for --{flag}")]
    TypeCoercion {
        flag: String,
        value: String,
        type_name: String,
    },

    #[error("Missing required [--{flag}] argument/flag")]
    MissingRequired { flag: String },

    #[error("Derived name '{name}' is used by more than one field")]
    DuplicateName { name: String },

    #[error(transparent)]
    Cli(#[from] clap::Error),
}

impl FlagfigError {
    /// True when the error is clap asking to print help or version output
    /// rather than a real failure.
    pub fn is_display_request(&self) -> bool {
        match self {
            FlagfigError::Cli(e) => matches!(
                e.kind(),
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
            ),
            _ => false,
        }
    }
}

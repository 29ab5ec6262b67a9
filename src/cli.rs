//! Flag-parsing primitive, built on [clap](https://docs.rs/clap).
//!
//! The resolver registers one long flag per leaf field and hands the raw input
//! tokens to clap. Only flags that were explicitly present on the command line
//! are reported back; values clap would fill in itself never are, so "flag
//! given" stays distinguishable from "default used".
//!
//! Accepted forms:
//!
//! - `--name value` and `--name=value` for every field. Values may start with
//!   `-` (`--offset -5`).
//! - `--name` alone for `bool` fields (means `true`), or `--name=false`.
//! - Repeating a flag is allowed; the last occurrence wins.

use clap::builder::ValueParser;
use clap::parser::ValueSource;
use clap::{Arg, ArgAction, Command};

use crate::error::FlagfigError;

/// Description of one registered flag.
#[derive(Debug, Clone, PartialEq)]
pub struct FlagSpec {
    pub name: String,
    pub type_name: String,
    pub env: String,
    pub switch: bool,
    pub help: Option<String>,
    /// Value the field holds before parsing, shown in `--help`.
    pub current: String,
}

/// A flag explicitly present in the input tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GivenFlag {
    pub name: String,
    pub raw: String,
}

/// Build the clap command for a set of flags.
pub fn build_command(command_name: &str, flags: &[FlagSpec]) -> Command {
    let mut command = Command::new(command_name.to_string())
        .no_binary_name(true)
        .args_override_self(true);
    if flags.iter().any(|f| f.name == "help") {
        command = command.disable_help_flag(true);
    }
    for flag in flags {
        command = command.arg(flag_arg(flag));
    }
    command
}

fn flag_arg(flag: &FlagSpec) -> Arg {
    let arg = Arg::new(flag.name.clone())
        .long(flag.name.clone())
        .value_name(flag.type_name.clone())
        .value_parser(ValueParser::string())
        .action(ArgAction::Set)
        .help(help_text(flag));

    if flag.switch {
        arg.num_args(0..=1)
            .require_equals(true)
            .default_missing_value("true")
    } else {
        arg.num_args(1).allow_hyphen_values(true)
    }
}

fn help_text(flag: &FlagSpec) -> String {
    let mut text = flag.help.clone().unwrap_or_default();
    if !text.is_empty() {
        text.push(' ');
    }
    text.push_str(&format!("[env: {}]", flag.env));
    if !flag.current.is_empty() {
        text.push_str(&format!(" [default: {}]", flag.current));
    }
    text
}

/// Parse `args` against `flags`.
///
/// Returns the flags given on the command line, in the order they appeared.
/// Unknown flags, stray positionals and `--help` surface as
/// [`FlagfigError::Cli`].
pub fn parse(
    command_name: &str,
    flags: &[FlagSpec],
    args: &[String],
) -> Result<Vec<GivenFlag>, FlagfigError> {
    let matches = build_command(command_name, flags).try_get_matches_from(args.iter())?;

    let mut given: Vec<(usize, GivenFlag)> = flags
        .iter()
        .filter(|flag| matches.value_source(&flag.name) == Some(ValueSource::CommandLine))
        .map(|flag| {
            let raw = matches
                .get_one::<String>(&flag.name)
                .cloned()
                .unwrap_or_default();
            let index = matches.index_of(&flag.name).unwrap_or(usize::MAX);
            (
                index,
                GivenFlag {
                    name: flag.name.clone(),
                    raw,
                },
            )
        })
        .collect();
    given.sort_by_key(|(index, _)| *index);

    Ok(given.into_iter().map(|(_, flag)| flag).collect())
}

//! Core resolution pass: walk the config, parse flags, enforce required fields.
//!
//! Operates on pre-loaded data ([`ResolveInput`]) with no I/O, so the whole
//! pass is testable with synthetic argv and environment. Steps:
//!
//! 1. Reject a missing target
//! 2. Walk the structure: derive names, apply env/default values, register setters
//! 3. Parse the input tokens and apply every flag given (highest priority)
//! 4. Fail on the first required field nothing supplied
//! 5. Report where every field's value came from

use tracing::debug;

use crate::cli;
use crate::env::EnvVars;
use crate::error::FlagfigError;
use crate::ops::{Resolution, ResolvedField};
use crate::walk::{Configure, Walker};

/// All pre-loaded data needed for one resolution pass. No I/O happens here.
#[derive(Debug, Clone, Default)]
pub struct ResolveInput {
    /// Application prefix for derived env var names (`myapp` → `MYAPP_*`).
    pub app_prefix: String,
    /// Program name shown in `--help` output.
    pub command_name: String,
    /// Input tokens, without the binary name.
    pub args: Vec<String>,
    /// Raw environment variable pairs (pass `std::env::vars().collect()` or synthetic data).
    pub env_vars: Vec<(String, String)>,
}

/// Resolve `target` from flags, environment and tag defaults.
///
/// `None` fails with [`FlagfigError::InvalidReceiver`] before anything else
/// happens. Any other error aborts the pass immediately; fields already
/// written keep whatever they were given, so the caller should discard the
/// structure rather than use it.
pub fn resolve<C: Configure + ?Sized>(
    target: Option<&mut C>,
    input: ResolveInput,
) -> Result<Resolution, FlagfigError> {
    // 1: Reject a missing target
    let target = target.ok_or(FlagfigError::InvalidReceiver)?;
    debug!(
        event = "flagfig.resolve.started",
        app_prefix = %input.app_prefix,
        args = input.args.len(),
    );

    // 2: Walk
    let mut walker = Walker::new(&input.app_prefix, EnvVars::new(input.env_vars));
    target.configure(&mut walker)?;

    // 3: Flags on top
    let specs = walker.flag_specs();
    for given in cli::parse(&input.command_name, &specs, &input.args)? {
        walker.apply_flag(&given.name, &given.raw)?;
    }

    // 4: Required check
    if let Some(flag) = walker.required.first_missing() {
        return Err(FlagfigError::MissingRequired {
            flag: flag.to_string(),
        });
    }

    // 5: Report
    let fields: Vec<ResolvedField> = walker
        .entries
        .iter()
        .map(|entry| ResolvedField {
            path: entry.path.clone(),
            flag: entry.setter.name().to_string(),
            env: entry.env.clone(),
            source: entry.source,
            required: entry.required,
            value: entry.setter.serialize(),
        })
        .collect();
    debug!(event = "flagfig.resolve.completed", fields = fields.len());

    Ok(Resolution { fields })
}

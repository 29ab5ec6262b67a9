//! Resolution report: where every field's final value came from.

use std::fmt;

use serde::Serialize;

use crate::types::Source;

/// One leaf field after a successful pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedField {
    /// Dotted structural path, e.g. `database.url`.
    pub path: String,
    pub flag: String,
    pub env: String,
    pub source: Source,
    pub required: bool,
    /// Final value in wire form (sequences comma-joined).
    pub value: String,
}

/// Returned by a successful resolution, one entry per leaf in declaration
/// order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    pub fields: Vec<ResolvedField>,
}

impl Resolution {
    /// Look a field up by its flag name.
    pub fn get(&self, flag: &str) -> Option<&ResolvedField> {
        self.fields.iter().find(|f| f.flag == flag)
    }

    /// Fields whose value came from `source`.
    pub fn from_source(&self, source: Source) -> impl Iterator<Item = &ResolvedField> {
        self.fields.iter().filter(move |f| f.source == source)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{} = {}", field.flag, field.value)?;
        }
        Ok(())
    }
}

//! Derived flag and environment variable names.
//!
//! A leaf's structural path is the list of field names from the root
//! aggregate down to the leaf. With path `["Db", "Test"]` and app prefix
//! `TEST`:
//!
//! | Name | Rule | Result |
//! |------|------|--------|
//! | flag | dash-joined, lower-case | `db-test` |
//! | env  | prefix + path, underscore-joined, upper-case | `TEST_DB_TEST` |
//!
//! Empty components are skipped, so an empty app prefix yields `DB_TEST`.
//! Explicit overrides in [`Tags`](crate::Tags) bypass both rules.

use crate::types::Tags;

/// Flag name for a leaf at `path` (`path` includes the leaf's own name).
pub fn flag_name(tags: &Tags, path: &[String]) -> String {
    if let Some(name) = tags.flag_override() {
        return name.to_string();
    }
    join_nonempty("-", path.iter().map(String::as_str)).to_lowercase()
}

/// Environment variable name for a leaf at `path`.
pub fn env_name(tags: &Tags, app_prefix: &str, path: &[String]) -> String {
    if let Some(name) = tags.env_override() {
        return name.to_string();
    }
    let parts = std::iter::once(app_prefix).chain(path.iter().map(String::as_str));
    join_nonempty("_", parts).to_uppercase()
}

/// Dotted display path (`database.url`) used in reports.
pub fn dotted(path: &[String]) -> String {
    join_nonempty(".", path.iter().map(String::as_str))
}

/// Like `join`, but drops empty parts instead of emitting doubled separators.
fn join_nonempty<'s>(sep: &str, parts: impl IntoIterator<Item = &'s str>) -> String {
    parts
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(sep)
}

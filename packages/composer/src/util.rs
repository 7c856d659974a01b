//! Utility Functions
//!
//! Identity and name helpers shared by view resolution and controller
//! namespacing. All of them are pure.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ComposeError, Result};

/// `HTMLPage` -> `HTML_Page`
static ACRONYM_BOUNDARY_REGEXP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z]+)([A-Z][a-z])").unwrap());

/// `userProfile` -> `user_Profile`
static WORD_BOUNDARY_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"([a-z\d])([A-Z])").unwrap());

/// Runs of anything that is not a letter or digit
static DELIMITER_REGEXP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").unwrap());

/// Convert PascalCase / camelCase to snake_case
pub fn snake_case(input: &str) -> String {
    let step = ACRONYM_BOUNDARY_REGEXP.replace_all(input, "${1}_${2}");
    WORD_BOUNDARY_REGEXP
        .replace_all(&step, "${1}_${2}")
        .to_lowercase()
}

/// Split a type identity into its path segments.
///
/// Both `::` and `\` are accepted as separators; empty segments are dropped.
pub fn identity_segments(identity: &str) -> Vec<&str> {
    identity
        .split("::")
        .flat_map(|part| part.split('\\'))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split identity segments at the bundle: everything up to and including the
/// first segment ending in `Bundle` is concatenated into the bundle name.
/// Without such a segment the bundle is empty.
pub fn split_bundle<'a, 's>(segments: &'a [&'s str]) -> (String, &'a [&'s str]) {
    match segments.iter().position(|s| s.ends_with("Bundle")) {
        Some(idx) => (segments[..=idx].concat(), &segments[idx + 1..]),
        None => (String::new(), segments),
    }
}

/// Last segment of a type identity
pub fn short_name(identity: &str) -> &str {
    identity_segments(identity).last().copied().unwrap_or("")
}

/// Strip `suffix` from the end of `name` if present
pub fn strip_suffix<'a>(name: &'a str, suffix: &str) -> &'a str {
    name.strip_suffix(suffix).unwrap_or(name)
}

/// Namespace key for a controller-style child: `(owner, action)` lower-cased
/// with every delimiter run collapsed to a single `_`.
///
/// Total over all inputs; an input made only of delimiters contributes nothing.
pub fn namespace_key(owner: &str, action: &str) -> String {
    [owner, action]
        .iter()
        .map(|part| normalize_part(part))
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

fn normalize_part(part: &str) -> String {
    DELIMITER_REGEXP
        .replace_all(part, "_")
        .trim_matches('_')
        .to_lowercase()
}

/// A `bundle:directory:file` template reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalName<'a> {
    pub bundle: &'a str,
    pub directory: &'a str,
    pub file: &'a str,
}

/// Parse a logical template name. It must contain exactly two colons.
pub fn parse_logical_name(name: &str) -> Result<LogicalName<'_>> {
    let parts: Vec<&str> = name.split(':').collect();
    match parts.as_slice() {
        [bundle, directory, file] => Ok(LogicalName {
            bundle,
            directory,
            file,
        }),
        _ => Err(ComposeError::MalformedLogicalName {
            name: name.to_string(),
        }),
    }
}

/// Namespace key of a logical template name: bundle and directory, normalized.
///
/// `AcmeBundle:Admin\User:index.html.twig` -> `acmebundle_admin_user`
pub fn normalize_logical_name(name: &str) -> Result<String> {
    let logical = parse_logical_name(name)?;
    Ok(namespace_key(logical.bundle, logical.directory))
}

//! PathTemplate placeholders against declared path parameters.

use crate::error::{Category, Diagnostic};
use crate::types::Position;
use std::collections::HashSet;

/// Placeholder names in `template`, in order and with duplicates.
///
/// A placeholder is a whole `/`-delimited segment of the form `{name}`.
/// Braces inside a segment (`v{n}`, `{a}.json`) do not count.
pub fn extract_placeholders(template: &str) -> Vec<&str> {
    template
        .split('/')
        .filter(|segment| {
            segment.len() >= 2 && segment.starts_with('{') && segment.ends_with('}')
        })
        .map(|segment| &segment[1..segment.len() - 1])
        .collect()
}

/// One diagnostic per placeholder occurrence missing from `declared`.
///
/// `anchor` is the `PathParams` value position when that field exists,
/// otherwise the record position.
pub fn check_placeholders(
    template: &str,
    declared: &HashSet<&str>,
    anchor: &Position,
) -> Vec<Diagnostic> {
    extract_placeholders(template)
        .into_iter()
        .filter(|name| !declared.contains(name))
        .map(|name| {
            Diagnostic::endpoint(
                anchor,
                Category::CrossField,
                format!("PathTemplate contains undeclared path parameter '{}'", name),
            )
        })
        .collect()
}

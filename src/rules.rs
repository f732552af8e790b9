//! Per-field literal rules.
//!
//! Each rule sees an already-unquoted string literal and reports every unmet
//! sub-rule. Non-empty is checked first; an empty value never reaches the
//! format rules.

use crate::error::{Category, Diagnostic};
use crate::schema::{DESCRIPTION, DOCUMENTATION_URL, METHOD, NAME, PATH_TEMPLATE};
use crate::types::{Position, Value};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;
use url::Url;

// ─── Cached regexes ─────────────────────────────────────────────────────────

static PASCAL_CASE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Za-z0-9]*$").unwrap());

pub const HTTP_METHODS: &[&str] = &["GET", "POST", "PUT", "PATCH", "DELETE"];

/// Signature shared by all literal rules: `(label, text, pos)`.
///
/// `label` is the field name as it appears in messages (`Name`, `PathParam.Name`).
pub type RuleFn = fn(&str, &str, &Position) -> Vec<Diagnostic>;

/// Pairs a field name with its literal rule.
#[derive(Clone, Copy, Debug)]
pub struct FieldRule {
    pub field: &'static str,
    pub check: RuleFn,
}

/// Rules for top-level endpoint fields.
pub static ENDPOINT_RULES: &[FieldRule] = &[
    FieldRule { field: NAME, check: pascal_case_name },
    FieldRule { field: METHOD, check: http_method },
    FieldRule { field: PATH_TEMPLATE, check: path_template },
    FieldRule { field: DESCRIPTION, check: non_empty },
    FieldRule { field: DOCUMENTATION_URL, check: documentation_url },
];

/// Rules for nested parameter records. Parameter names are free-form
/// identifiers, so `Name` only has to be non-empty.
pub static PARAM_RULES: &[FieldRule] = &[
    FieldRule { field: NAME, check: non_empty },
    FieldRule { field: DESCRIPTION, check: non_empty },
];

/// Field name → rule lookup.
#[derive(Clone, Debug, Default)]
pub struct RuleTable {
    rules: HashMap<&'static str, RuleFn>,
}

impl RuleTable {
    pub fn from_rules(rules: &[FieldRule]) -> Self {
        RuleTable {
            rules: rules.iter().map(|r| (r.field, r.check)).collect(),
        }
    }

    pub fn get(&self, field: &str) -> Option<RuleFn> {
        self.rules.get(field).copied()
    }

    /// Add or replace the rule for one field.
    pub fn insert(&mut self, rule: FieldRule) {
        self.rules.insert(rule.field, rule.check);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Apply `rule` to `value`, short-circuiting on anything but a string literal.
pub fn apply_rule(label: &str, value: &Value, rule: RuleFn) -> Vec<Diagnostic> {
    match value {
        Value::StringLiteral { text, pos } => rule(label, text, pos),
        other => vec![Diagnostic::endpoint(
            other.pos(),
            Category::Structural,
            format!("field '{}' must be a string literal", label),
        )],
    }
}

// ─── Rules ──────────────────────────────────────────────────────────────────

pub fn non_empty(label: &str, text: &str, pos: &Position) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    require_non_empty(label, text, pos, &mut out);
    out
}

pub fn pascal_case_name(label: &str, text: &str, pos: &Position) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    if require_non_empty(label, text, pos, &mut out) && !PASCAL_CASE_RE.is_match(text) {
        out.push(semantic(pos, format!("field '{}' must be in PascalCase", label)));
    }
    out
}

pub fn http_method(label: &str, text: &str, pos: &Position) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    if require_non_empty(label, text, pos, &mut out) && !HTTP_METHODS.contains(&text) {
        out.push(semantic(
            pos,
            format!("field '{}' must be one of {}", label, HTTP_METHODS.join(", ")),
        ));
    }
    out
}

pub fn path_template(label: &str, text: &str, pos: &Position) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    if require_non_empty(label, text, pos, &mut out) && !text.starts_with('/') {
        out.push(semantic(pos, format!("field '{}' must start with a '/'", label)));
    }
    out
}

pub fn documentation_url(label: &str, text: &str, pos: &Position) -> Vec<Diagnostic> {
    let mut out = Vec::new();
    if require_non_empty(label, text, pos, &mut out) && !is_http_url(text) {
        out.push(semantic(pos, format!("field '{}' must be a valid URL", label)));
    }
    out
}

/// An absolute http(s) URL with a non-empty host.
pub fn is_http_url(text: &str) -> bool {
    match Url::parse(text) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|h| !h.is_empty())
        }
        Err(_) => false,
    }
}

/// Push the empty-value diagnostic; returns whether later rules may run.
fn require_non_empty(
    label: &str,
    text: &str,
    pos: &Position,
    out: &mut Vec<Diagnostic>,
) -> bool {
    if text.is_empty() {
        out.push(semantic(pos, format!("field '{}' cannot be empty", label)));
        return false;
    }
    true
}

fn semantic(pos: &Position, message: String) -> Diagnostic {
    Diagnostic::endpoint(pos, Category::Semantic, message)
}

use crate::types::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Which analyzer produced a diagnostic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    EndpointStructFields,
    ApiTypesNaming,
}

impl Check {
    /// The analyzer identifier shown to users.
    pub fn name(&self) -> &'static str {
        match self {
            Check::EndpointStructFields => "endpointstructfields",
            Check::ApiTypesNaming => "apitypesnaming",
        }
    }
}

/// Violation taxonomy. Not a severity: every diagnostic is equally a finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Missing field, wrong value shape, or an empty list.
    Structural,
    /// A literal that fails a format, enum or non-empty rule.
    Semantic,
    /// PathTemplate placeholders disagree with the declared path parameters.
    CrossField,
    /// A type name outside the API naming taxonomy.
    Naming,
}

/// A (position, message) violation report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub pos: Position,
    pub message: String,
    pub check: Check,
    pub category: Category,
}

impl Diagnostic {
    pub(crate) fn endpoint(pos: &Position, category: Category, message: String) -> Self {
        Diagnostic {
            pos: pos.clone(),
            message,
            check: Check::EndpointStructFields,
            category,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.pos, self.message, self.check.name())
    }
}

/// Error kind for parse failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
    UnknownVariant,
}

/// Produced by `parse` when the extractor document cannot be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl ParseError {
    pub(crate) fn new(kind: ParseErrorKind, message: impl Into<String>) -> Self {
        ParseError {
            kind,
            message: message.into(),
            path: None,
        }
    }
}

/// All diagnostics of one validation pass, in report order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics produced by one analyzer.
    pub fn for_check(&self, check: Check) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| d.check == check)
    }

    pub fn messages(&self) -> Vec<&str> {
        self.diagnostics.iter().map(|d| d.message.as_str()).collect()
    }
}

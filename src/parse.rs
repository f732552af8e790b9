use crate::error::{ParseError, ParseErrorKind};
use crate::types::Declarations;

const TOP_LEVEL_KEYS: &[&str] = &["endpoints", "types"];

/// Parse an extractor output document (YAML or JSON) into declarations.
///
/// Performs deserialization and shape mapping only; no convention checks.
pub fn parse(input: &str) -> Result<Declarations, ParseError> {
    let result = parse_inner(input);
    if let Err(e) = &result {
        tracing::debug!(kind = ?e.kind, path = ?e.path, "declarations document rejected");
    }
    result
}

fn parse_inner(input: &str) -> Result<Declarations, ParseError> {
    if input.trim().is_empty() {
        return Err(ParseError::new(ParseErrorKind::Syntax, "empty input"));
    }

    check_multi_document(input)?;

    // YAML → serde_json::Value (order-preserving) → typed declarations
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
        let msg = e.to_string();
        ParseError::new(classify_saphyr_error(&msg), msg)
    })?;

    let Some(obj) = value.as_object() else {
        return Err(ParseError::new(
            ParseErrorKind::TypeMismatch,
            "document root must be a mapping",
        ));
    };

    for key in obj.keys() {
        if !TOP_LEVEL_KEYS.contains(&key.as_str()) {
            return Err(ParseError {
                kind: ParseErrorKind::UnknownVariant,
                message: format!("unknown top-level field: {}", key),
                path: Some(key.clone()),
            });
        }
    }

    let decls: Declarations = serde_json::from_value(value).map_err(|e| {
        let msg = e.to_string();
        ParseError::new(classify_json_error(&msg), msg)
    })?;

    tracing::debug!(
        endpoints = decls.endpoints.len(),
        types = decls.types.len(),
        "declarations parsed"
    );
    Ok(decls)
}

/// Reject streams with more than one YAML document.
/// Only `---` at column 0 counts, so block scalars cannot trip it.
fn check_multi_document(input: &str) -> Result<(), ParseError> {
    let mut doc_count = 0;
    for line in input.lines() {
        if line.starts_with("---") && line[3..].trim().is_empty() {
            doc_count += 1;
            if doc_count > 1 {
                return Err(ParseError::new(
                    ParseErrorKind::Syntax,
                    "multi-document YAML is not supported",
                ));
            }
        }
    }
    Ok(())
}

fn classify_saphyr_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown") || lower.contains("variant") {
        ParseErrorKind::UnknownVariant
    } else if lower.contains("type") || lower.contains("invalid") || lower.contains("expected") {
        ParseErrorKind::TypeMismatch
    } else {
        ParseErrorKind::Syntax
    }
}

fn classify_json_error(msg: &str) -> ParseErrorKind {
    let lower = msg.to_lowercase();
    if lower.contains("unknown variant") || lower.contains("unknown field") {
        ParseErrorKind::UnknownVariant
    } else {
        ParseErrorKind::TypeMismatch
    }
}

//! Nested parameter lists (`PathParams`, `QueryParams`).

use crate::error::{Category, Diagnostic};
use crate::rules::{RuleTable, apply_rule};
use crate::schema::{NAME, ParamListSpec, check_required, qualified};
use crate::types::{Position, Value};

/// A parameter name declared in a list, with the position of its literal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeclaredParam {
    pub name: String,
    pub pos: Position,
}

/// Output of [`validate_param_list`].
#[derive(Clone, Debug, Default)]
pub struct ParamListOutcome {
    pub names: Vec<DeclaredParam>,
    pub diagnostics: Vec<Diagnostic>,
}

/// Validate one list-valued field and collect the names it declares.
///
/// A value that is not a list, a list of the wrong element type, and an
/// empty list each produce a single shape diagnostic and no names. Every
/// item is checked against the item schema and then field by field with
/// `rules`. Any non-empty `Name` literal is collected even when some other
/// rule on the same item failed.
pub fn validate_param_list(
    value: &Value,
    spec: &ParamListSpec,
    rules: &RuleTable,
) -> ParamListOutcome {
    let kind = spec.item_schema.kind;
    let mut outcome = ParamListOutcome::default();

    let items = match value {
        Value::List {
            item_type, items, ..
        } if item_type.as_deref().is_none_or(|t| t == kind) => items,
        other => {
            outcome.diagnostics.push(shape(
                other.pos(),
                format!("field '{}' must be a list of {}", spec.field, kind),
            ));
            return outcome;
        }
    };

    if items.is_empty() {
        outcome.diagnostics.push(shape(
            value.pos(),
            format!("field '{}' must be a non-empty list of {}", spec.field, kind),
        ));
        return outcome;
    }

    for item in items {
        outcome
            .diagnostics
            .extend(check_required(item, spec.item_schema, Some(kind)));

        for field in &item.fields {
            if let Some(rule) = rules.get(&field.name) {
                let label = qualified(Some(kind), &field.name);
                outcome.diagnostics.extend(apply_rule(&label, &field.value, rule));
            }
            if field.name == NAME
                && let Value::StringLiteral { text, pos } = &field.value
                && !text.is_empty()
            {
                outcome.names.push(DeclaredParam {
                    name: text.clone(),
                    pos: pos.clone(),
                });
            }
        }
    }

    outcome
}

fn shape(pos: &Position, message: String) -> Diagnostic {
    Diagnostic::endpoint(pos, Category::Structural, message)
}

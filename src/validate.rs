//! The validation pipeline.
//!
//! Each endpoint record goes through four stages, in order: required fields,
//! per-field literal rules, nested parameter lists, and the placeholder
//! cross-check. Every stage runs to completion regardless of what earlier
//! stages reported. Returns **all** diagnostics; nothing here fails.

use crate::error::*;
use crate::naming::NamingConfig;
use crate::params::validate_param_list;
use crate::placeholders::check_placeholders;
use crate::rules::{ENDPOINT_RULES, PARAM_RULES, RuleTable, apply_rule};
use crate::schema::{
    ENDPOINT_SCHEMA, PARAM_LISTS, PATH_TEMPLATE, ParamListSpec, Schema, check_required,
};
use crate::sink::DiagnosticSink;
use crate::types::*;
use std::collections::HashSet;

/// Explicit validation context: schemas, rule tables and naming filter.
#[derive(Clone, Debug)]
pub struct Validators {
    pub endpoint_schema: Schema,
    pub endpoint_rules: RuleTable,
    pub param_lists: Vec<ParamListSpec>,
    pub param_rules: RuleTable,
    pub naming: NamingConfig,
}

impl Default for Validators {
    fn default() -> Self {
        Validators {
            endpoint_schema: ENDPOINT_SCHEMA,
            endpoint_rules: RuleTable::from_rules(ENDPOINT_RULES),
            param_lists: PARAM_LISTS.to_vec(),
            param_rules: RuleTable::from_rules(PARAM_RULES),
            naming: NamingConfig::default(),
        }
    }
}

impl Validators {
    pub fn with_endpoint_schema(mut self, schema: Schema) -> Self {
        self.endpoint_schema = schema;
        self
    }

    pub fn with_naming(mut self, naming: NamingConfig) -> Self {
        self.naming = naming;
        self
    }
}

/// Validate every endpoint record and type declaration.
pub fn validate(decls: &Declarations, validators: &Validators) -> ValidationResult {
    let mut diagnostics = Vec::new();
    validate_into(decls, validators, &mut diagnostics);
    ValidationResult { diagnostics }
}

/// Like [`validate`], streaming diagnostics into `sink`.
pub fn validate_into(
    decls: &Declarations,
    validators: &Validators,
    sink: &mut dyn DiagnosticSink,
) {
    let _span = tracing::debug_span!(
        "validate",
        endpoints = decls.endpoints.len(),
        types = decls.types.len()
    )
    .entered();

    let mut reported = 0usize;
    for record in &decls.endpoints {
        for diagnostic in validate_endpoint(record, validators) {
            sink.report(diagnostic);
            reported += 1;
        }
    }
    for decl in &decls.types {
        for diagnostic in validators.naming.check_decl(decl) {
            sink.report(diagnostic);
            reported += 1;
        }
    }

    tracing::debug!(diagnostics = reported, "validation finished");
}

/// Run the four endpoint stages over one record.
pub fn validate_endpoint(record: &Record, validators: &Validators) -> Vec<Diagnostic> {
    let _span = tracing::debug_span!("endpoint", pos = %record.pos).entered();

    let mut diagnostics = check_required(record, &validators.endpoint_schema, None);

    // Per-field rules; absent fields never get here.
    for field in &record.fields {
        if let Some(rule) = validators.endpoint_rules.get(&field.name) {
            diagnostics.extend(apply_rule(&field.name, &field.value, rule));
        }
    }

    // Nested lists. Only path-param lists feed the cross-check.
    let mut declared = Vec::new();
    let mut anchor = None;
    for spec in &validators.param_lists {
        let Some(value) = record.get_field(spec.field) else {
            continue;
        };
        let outcome = validate_param_list(value, spec, &validators.param_rules);
        diagnostics.extend(outcome.diagnostics);
        if spec.declares_path_params {
            anchor.get_or_insert(value.pos());
            declared.extend(outcome.names);
        }
    }

    // Malformed or missing templates degrade to "" and yield no placeholders.
    let template = record
        .get_field(PATH_TEMPLATE)
        .and_then(Value::as_str)
        .unwrap_or("");
    let declared_names: HashSet<&str> = declared.iter().map(|p| p.name.as_str()).collect();
    diagnostics.extend(check_placeholders(
        template,
        &declared_names,
        anchor.unwrap_or(&record.pos),
    ));

    tracing::trace!(count = diagnostics.len(), "endpoint checked");
    diagnostics
}

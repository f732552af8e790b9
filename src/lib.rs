//! Convention checks for API endpoint declarations and API type names.
//!
//! An extraction collaborator walks the host code base and hands over two
//! kinds of declarations: endpoint records (structured descriptions of an
//! HTTP-style operation) and named type declarations. This crate judges them:
//!
//! ```text
//! parse(yaml) → Declarations → validate(decls, &Validators) → ValidationResult
//! ```
//!
//! Endpoint records must carry `Name`, `PathTemplate`, `Description`,
//! `Method` and `DocumentationURL`; each literal is checked against its own
//! rule, `PathParams`/`QueryParams` items are checked recursively, and every
//! `{placeholder}` segment of the path template must be declared as a path
//! parameter. Struct types under the `api` namespace must follow the
//! `apiResponse<X>`/`apiRequest<X>`/`Model<X>`/`Params<X>`/`Client` naming
//! taxonomy.
//!
//! Validation never fails: every violation becomes a [`Diagnostic`].
//!
//! # Quick Start
//!
//! ```rust
//! let yaml = r#"
//! endpoints:
//!   - pos: { file: endpoints.go, line: 12, column: 6 }
//!     fields:
//!       Name: { string: { text: GetRule } }
//!       Description: { string: { text: "Get one firewall rule" } }
//!       Method: { string: { text: GET } }
//!       PathTemplate: { string: { text: "/v1/rules/{ruleId}" } }
//!       DocumentationURL: { string: { text: "https://docs.example.com/rules" } }
//! "#;
//!
//! let result = apilint::lint(yaml).expect("well-formed document");
//! assert_eq!(
//!     result.messages(),
//!     vec!["PathTemplate contains undeclared path parameter 'ruleId'"]
//! );
//! ```

pub mod error;
pub mod naming;
pub mod params;
pub mod parse;
pub mod placeholders;
pub mod rules;
pub mod schema;
pub mod sink;
pub mod types;
pub mod validate;

pub use error::*;
pub use types::*;

pub use naming::{NamingConfig, check_type_name};
pub use parse::parse;
pub use sink::DiagnosticSink;
pub use validate::{Validators, validate, validate_endpoint, validate_into};

/// Convenience entry point composing parse → validate with the default context.
///
/// # Errors
///
/// Returns the [`ParseError`] if the document cannot be decoded. Convention
/// violations are never errors; they are in the returned result.
pub fn lint(input: &str) -> Result<ValidationResult, ParseError> {
    let decls = parse::parse(input)?;
    Ok(validate::validate(&decls, &Validators::default()))
}

//! Required-field schemas for endpoint records and their nested parameters.

use crate::error::{Category, Diagnostic};
use crate::types::Record;

/// A fixed, ordered set of required field names for one record kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Schema {
    /// Record kind, used to qualify nested field names (`PathParam.Name`).
    pub kind: &'static str,
    pub required: &'static [&'static str],
}

pub const NAME: &str = "Name";
pub const PATH_TEMPLATE: &str = "PathTemplate";
pub const DESCRIPTION: &str = "Description";
pub const METHOD: &str = "Method";
pub const DOCUMENTATION_URL: &str = "DocumentationURL";
pub const PATH_PARAMS: &str = "PathParams";
pub const QUERY_PARAMS: &str = "QueryParams";

/// The endpoint record schema.
pub static ENDPOINT_SCHEMA: Schema = Schema {
    kind: "Endpoint",
    required: &[NAME, PATH_TEMPLATE, DESCRIPTION, METHOD, DOCUMENTATION_URL],
};

pub static PATH_PARAM_SCHEMA: Schema = Schema {
    kind: "PathParam",
    required: &[NAME, DESCRIPTION],
};

pub static QUERY_PARAM_SCHEMA: Schema = Schema {
    kind: "QueryParam",
    required: &[NAME, DESCRIPTION],
};

/// A list-valued endpoint field whose items follow a param schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParamListSpec {
    pub field: &'static str,
    pub item_schema: &'static Schema,
    /// Whether item names satisfy PathTemplate placeholders.
    pub declares_path_params: bool,
}

pub static PARAM_LISTS: &[ParamListSpec] = &[
    ParamListSpec {
        field: PATH_PARAMS,
        item_schema: &PATH_PARAM_SCHEMA,
        declares_path_params: true,
    },
    ParamListSpec {
        field: QUERY_PARAMS,
        item_schema: &QUERY_PARAM_SCHEMA,
        declares_path_params: false,
    },
];

/// Report every schema field absent from `record`, in schema order.
///
/// `qualifier` prefixes field names in messages; nested records pass their
/// kind so the message reads `field 'PathParam.Name' is missing`.
pub fn check_required(
    record: &Record,
    schema: &Schema,
    qualifier: Option<&str>,
) -> Vec<Diagnostic> {
    schema
        .required
        .iter()
        .filter(|field| !record.has_field(field))
        .map(|field| {
            Diagnostic::endpoint(
                &record.pos,
                Category::Structural,
                format!("field '{}' is missing", qualified(qualifier, field)),
            )
        })
        .collect()
}

pub(crate) fn qualified(qualifier: Option<&str>, field: &str) -> String {
    match qualifier {
        Some(q) => format!("{}.{}", q, field),
        None => field.to_string(),
    }
}

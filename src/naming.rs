//! API type naming conventions.
//!
//! Struct types declared under the designated namespace must be named
//! `apiResponse<X>`, `apiRequest<X>`, `Model<X>`, `Params<X>` (with `X`
//! starting uppercase) or exactly `Client`.

use crate::error::{Category, Check, Diagnostic};
use crate::types::{Position, TypeDecl};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::LazyLock;

static API_TYPE_NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:(?:apiResponse|apiRequest|Model|Params)[A-Z][A-Za-z0-9]*|Client)$").unwrap()
});

/// Which declarations the naming check applies to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Directory segment marking the designated namespace.
    pub namespace_segment: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        NamingConfig {
            namespace_segment: "api".to_string(),
        }
    }
}

impl NamingConfig {
    /// Whether a declaration in `file` lives under the namespace segment.
    ///
    /// Only directory components count; the file name itself never matches.
    pub fn in_namespace(&self, file: &str) -> bool {
        Path::new(file)
            .parent()
            .is_some_and(|dir| dir.iter().any(|c| c == self.namespace_segment.as_str()))
    }

    pub fn check_decl(&self, decl: &TypeDecl) -> Vec<Diagnostic> {
        let in_namespace = decl.pos.file.as_deref().is_some_and(|f| self.in_namespace(f));
        check_type_name(&decl.name, decl.is_struct, in_namespace, &decl.pos)
    }
}

pub fn is_api_type_name(name: &str) -> bool {
    API_TYPE_NAME_RE.is_match(name)
}

/// Judge one type name. Returns nothing for non-structs and names outside
/// the namespace.
pub fn check_type_name(
    name: &str,
    is_struct: bool,
    in_namespace: bool,
    pos: &Position,
) -> Vec<Diagnostic> {
    if !is_struct || !in_namespace || is_api_type_name(name) {
        return Vec::new();
    }
    vec![Diagnostic {
        pos: pos.clone(),
        message: format!("type {} does not follow API type naming conventions", name),
        check: Check::ApiTypesNaming,
        category: Category::Naming,
    }]
}

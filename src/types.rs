//! The declaration tree handed over by the extraction collaborator.
//!
//! Records are immutable during validation. Nothing here knows how the host
//! language was parsed; an extractor only has to produce these shapes.

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ─── Position ───────────────────────────────────────────────────────────────

/// Source position used as a diagnostic anchor.
///
/// Line and column are 1-based; `0` means unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Position {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(file: impl Into<String>, line: u32, column: u32) -> Self {
        Position {
            file: Some(file.into()),
            line,
            column,
        }
    }

    /// A position with no file, for records built in memory.
    pub fn at(line: u32, column: u32) -> Self {
        Position {
            file: None,
            line,
            column,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.file {
            Some(file) => write!(f, "{}:{}:{}", file, self.line, self.column),
            None => write!(f, "{}:{}", self.line, self.column),
        }
    }
}

// ─── Value ──────────────────────────────────────────────────────────────────

/// A field value as the extractor understood it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// A string literal, already unquoted.
    #[serde(rename = "string")]
    StringLiteral {
        text: String,
        #[serde(default)]
        pos: Position,
    },
    /// A list literal whose items are nested records.
    List {
        /// Declared element type of the literal, when the extractor saw one.
        #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
        item_type: Option<String>,
        #[serde(default)]
        items: Vec<Record>,
        #[serde(default)]
        pos: Position,
    },
    /// Any expression the validator does not interpret.
    Other {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        expr: Option<String>,
        #[serde(default)]
        pos: Position,
    },
}

impl Value {
    pub fn string(text: impl Into<String>, pos: Position) -> Self {
        Value::StringLiteral {
            text: text.into(),
            pos,
        }
    }

    pub fn list(items: Vec<Record>, pos: Position) -> Self {
        Value::List {
            item_type: None,
            items,
            pos,
        }
    }

    pub fn typed_list(item_type: impl Into<String>, items: Vec<Record>, pos: Position) -> Self {
        Value::List {
            item_type: Some(item_type.into()),
            items,
            pos,
        }
    }

    pub fn other(pos: Position) -> Self {
        Value::Other { expr: None, pos }
    }

    pub fn pos(&self) -> &Position {
        match self {
            Value::StringLiteral { pos, .. }
            | Value::List { pos, .. }
            | Value::Other { pos, .. } => pos,
        }
    }

    /// The literal text, if this is a string literal.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::StringLiteral { text, .. } => Some(text),
            _ => None,
        }
    }
}

// ─── Record ─────────────────────────────────────────────────────────────────

/// One named slot of a record.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub name: String,
    pub value: Value,
}

/// An ordered mapping from field name to value, anchored at its declaration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub pos: Position,
    #[serde(default)]
    pub fields: Fields,
}

impl Record {
    pub fn new(pos: Position) -> Self {
        Record {
            pos,
            fields: Fields::default(),
        }
    }

    /// Builder-style field insertion; a repeated name replaces the earlier value.
    pub fn with_field(mut self, name: impl Into<String>, value: Value) -> Self {
        self.fields.insert(name, value);
        self
    }

    pub fn get_field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.fields.get(name).is_some()
    }
}

/// Record fields in declaration order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Fields(Vec<Field>);

impl Fields {
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.iter().find(|f| f.name == name).map(|f| &f.value)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.0.iter_mut().find(|f| f.name == name) {
            Some(existing) => existing.value = value,
            None => self.0.push(Field { name, value }),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for field in &self.0 {
            map.serialize_entry(&field.name, &field.value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Fields {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FieldsVisitor;

        impl<'de> Visitor<'de> for FieldsVisitor {
            type Value = Fields;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a mapping of field names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Fields, A::Error> {
                let mut fields = Fields::default();
                while let Some((name, value)) = access.next_entry::<String, Value>()? {
                    fields.insert(name, value);
                }
                Ok(fields)
            }
        }

        deserializer.deserialize_map(FieldsVisitor)
    }
}

// ─── Type declarations ──────────────────────────────────────────────────────

/// A named type declaration, as enumerated by the collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    /// Whether the declared type is a struct; only structs are checked.
    #[serde(rename = "struct", default = "default_true")]
    pub is_struct: bool,
    #[serde(default)]
    pub pos: Position,
}

fn default_true() -> bool {
    true
}

// ─── Declarations ───────────────────────────────────────────────────────────

/// Everything one analysis pass extracted: endpoint records and type declarations.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Declarations {
    pub endpoints: Vec<Record>,
    pub types: Vec<TypeDecl>,
}

use std::fmt;

use indexmap::IndexMap;
use serde_json::value::RawValue;

/// Kind of constant group, as named by a definition's `type` field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConstType {
    /// Sequential integers with optional restart points
    Enum,
    /// Zero sentinel followed by powers of two
    Flags,
    /// Names bound to literal values
    Aliases,
}

impl ConstType {
    /// Match a manifest `type` string, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "enum" => Some(ConstType::Enum),
            "flags" => Some(ConstType::Flags),
            "aliases" => Some(ConstType::Aliases),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ConstType::Enum => "enum",
            ConstType::Flags => "flags",
            ConstType::Aliases => "aliases",
        }
    }
}

impl fmt::Display for ConstType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operator combining the components of a composite flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CompositionOp {
    /// Bitwise OR
    Or,
}

impl CompositionOp {
    /// Match a manifest `op` string, ignoring case.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "or" => Some(CompositionOp::Or),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CompositionOp::Or => "or",
        }
    }
}

impl fmt::Display for CompositionOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A flag value defined as a combination of other flags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composite {
    /// Names of the flags being combined, in emission order
    pub components: Vec<String>,
    pub op: CompositionOp,
}

/// Literal bound to an alias name.
///
/// Rendered exactly as written in the manifest: numbers keep their source
/// text (no float conversion, no range limit), strings are emitted without
/// quotes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AliasValue {
    /// JSON number, as written
    Number(String),
    Text(String),
    Bool(bool),
    Null,
}

impl AliasValue {
    /// Read a literal from its raw JSON text. Arrays and objects are not
    /// literals and yield `None`.
    pub fn from_raw(raw: &RawValue) -> Option<Self> {
        let text = raw.get().trim();
        match text.as_bytes().first()? {
            b'"' => serde_json::from_str(text).ok().map(AliasValue::Text),
            b'-' | b'0'..=b'9' => Some(AliasValue::Number(text.to_string())),
            _ => match text {
                "true" => Some(AliasValue::Bool(true)),
                "false" => Some(AliasValue::Bool(false)),
                "null" => Some(AliasValue::Null),
                _ => None,
            },
        }
    }
}

impl fmt::Display for AliasValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AliasValue::Number(n) => f.write_str(n),
            AliasValue::Text(s) => f.write_str(s),
            AliasValue::Bool(b) => write!(f, "{b}"),
            AliasValue::Null => f.write_str("null"),
        }
    }
}

/// Type-specific payload of a definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DefinitionKind {
    Enum {
        values: Vec<String>,
        /// Value name -> index the running counter restarts at
        overrides: IndexMap<String, i64>,
        as_preproc: bool,
    },
    Flags {
        /// Sentinel emitted as literal 0
        zero: String,
        /// Remaining flags; position `i` is emitted as `1 << i`
        bits: Vec<String>,
        composites: IndexMap<String, Composite>,
    },
    Aliases {
        values: IndexMap<String, AliasValue>,
        as_preproc: bool,
    },
}

/// One named group of constants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    /// Manifest key; the first character is a namespace marker
    pub key: String,
    pub kind: DefinitionKind,
}

impl Definition {
    pub fn new(key: impl Into<String>, kind: DefinitionKind) -> Self {
        Self {
            key: key.into(),
            kind,
        }
    }

    /// Symbol used for the group in generated code: the key without its
    /// leading namespace marker.
    pub fn symbol_name(&self) -> &str {
        let mut chars = self.key.chars();
        chars.next();
        chars.as_str()
    }

    pub fn const_type(&self) -> ConstType {
        match self.kind {
            DefinitionKind::Enum { .. } => ConstType::Enum,
            DefinitionKind::Flags { .. } => ConstType::Flags,
            DefinitionKind::Aliases { .. } => ConstType::Aliases,
        }
    }

    /// Whether the group should be rendered as raw preprocessor-style defines.
    pub fn as_preproc(&self) -> bool {
        match self.kind {
            DefinitionKind::Enum { as_preproc, .. } | DefinitionKind::Aliases { as_preproc, .. } => {
                as_preproc
            }
            DefinitionKind::Flags { .. } => false,
        }
    }
}

/// Errors raised while turning a manifest into a [`Schema`](super::schema::Schema)
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("manifest has no 'definitions' mapping")]
    MissingDefinitions,

    #[error("definition '{key}': unknown type '{type_name}', expected enum, flags or aliases")]
    UnknownType { key: String, type_name: String },

    #[error("definition '{key}': composite '{composite}' uses unknown operator '{op}'")]
    UnknownOperator {
        key: String,
        composite: String,
        op: String,
    },

    #[error("definition '{key}': missing 'values'")]
    MissingValues { key: String },

    #[error("definition '{key}': values must be {expected}")]
    ValuesShape { key: String, expected: &'static str },

    #[error("definition '{key}': flags need at least the zero value")]
    EmptyFlags { key: String },

    #[error("target '{path}' must be a list of definition keys")]
    InvalidTarget { path: String },

    #[error("target '{target}' references unknown definition '{key}'")]
    UnknownDefinition { target: String, key: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

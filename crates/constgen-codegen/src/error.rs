use constgen_schema::{CompositionOp, Language};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("unsupported composition: {language} has no '{op}' operator")]
    UnsupportedComposition { language: Language, op: CompositionOp },

    #[error("enum value '{name}' has no representable index; the previous index is i64::MAX")]
    IndexOverflow { name: String },

    #[error("failed to load manifest: {0}")]
    Schema(#[from] constgen_schema::SchemaError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

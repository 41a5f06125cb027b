pub mod loader;
pub mod parser;
pub mod types;

// Re-exports
pub use types::common::Language;
pub use types::definition::{
    AliasValue, Composite, CompositionOp, ConstType, Definition, DefinitionKind,
};
pub use types::error::SchemaError;
pub use types::schema::{Schema, Target};

pub mod context;
pub mod dump;
pub mod error;
pub mod generator;
pub mod traits;

// Language emitters
pub mod emitters;

// Re-exports
pub use context::EmitContext;
pub use dump::{dump, dump_from_file};
pub use error::CodegenError;
pub use generator::{ConstGenerator, GeneratedFiles};
pub use traits::LanguageEmitter;

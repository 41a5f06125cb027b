use std::path::Path;

use constgen_schema::{CompositionOp, Definition, Language};

use crate::context::EmitContext;
use crate::error::CodegenError;

/// First line of every generated file.
pub const GENERATED_BANNER: &str = "THIS FILE WAS GENERATED WITH CONSTGEN; DO NOT MANUALLY MODIFY IT";

/// Prefix of the line naming the manifest a file was generated from.
pub const ORIGIN_FILE_BANNER: &str = "CONSTANTS ORIGIN FILE:";

/// Language-specific constants emitter.
///
/// Each target language implements this trait to turn definitions into
/// source text. A generated file is `header`, then one `content` block per
/// definition, then `footer`.
pub trait LanguageEmitter {
    /// Which language this emitter targets.
    fn language(&self) -> Language;

    /// File extension for this language, without the dot (e.g., "h").
    fn file_extension(&self) -> &str;

    /// Token opening a line comment.
    fn comment_prefix(&self) -> &str;

    /// Token joining composite components for `op`, or `None` if the
    /// language has no spelling for it.
    fn compose_token(&self, op: CompositionOp) -> Option<&str>;

    /// Banner, origin annotation and any file guard.
    fn header(&self, target: &Path, origin: &Path) -> String;

    /// Render a single definition.
    fn content(&self, def: &Definition) -> Result<String, CodegenError>;

    /// Close whatever `header` opened.
    fn footer(&self, target: &Path) -> String;

    /// Spaces per indentation level for this language.
    fn indent_width(&self) -> usize {
        4
    }

    fn new_context(&self) -> EmitContext {
        EmitContext::new(self.indent_width())
    }

    /// Write the generated-file banner and origin line as comments.
    fn emit_banner(&self, origin: &Path, ctx: &mut EmitContext) {
        let prefix = self.comment_prefix();
        ctx.line(format!("{prefix} {GENERATED_BANNER}"));
        ctx.line(format!("{prefix} {ORIGIN_FILE_BANNER} {}", origin.display()));
    }
}

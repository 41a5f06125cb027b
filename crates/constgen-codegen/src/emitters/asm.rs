use std::path::Path;

use constgen_schema::{CompositionOp, Definition, DefinitionKind, Language};

use super::c_lang::CEmitter;
use super::{compose, enumerate_values, file_guard};
use crate::error::CodegenError;
use crate::traits::LanguageEmitter;

/// GNU assembler include emitter.
///
/// Every definition becomes a flat list of `.equ` directives; `as_preproc`
/// has no effect here.
pub struct AsmEmitter;

impl AsmEmitter {
    fn include_guard(target: &Path) -> String {
        format!("{}_INC", file_guard(target))
    }
}

impl LanguageEmitter for AsmEmitter {
    fn language(&self) -> Language {
        Language::Asm
    }

    fn file_extension(&self) -> &str {
        "inc"
    }

    fn comment_prefix(&self) -> &str {
        ";"
    }

    fn compose_token(&self, _op: CompositionOp) -> Option<&str> {
        None
    }

    fn header(&self, target: &Path, origin: &Path) -> String {
        let guard = Self::include_guard(target);
        let mut ctx = self.new_context();
        self.emit_banner(origin, &mut ctx);
        ctx.blank();
        ctx.push_indent();
        ctx.line(format!(".ifndef {guard}"));
        ctx.line(format!(".set {guard}, 1"));
        ctx.finish()
    }

    fn content(&self, def: &Definition) -> Result<String, CodegenError> {
        let mut ctx = self.new_context();
        ctx.push_indent();
        match &def.kind {
            DefinitionKind::Enum {
                values, overrides, ..
            } => {
                for (name, index) in enumerate_values(values, overrides)? {
                    ctx.line(format!(".equ {name}, {index}"));
                }
            }
            DefinitionKind::Flags {
                zero,
                bits,
                composites,
            } => {
                ctx.line(format!(".equ {zero}, 0"));
                for (shift, name) in bits.iter().enumerate() {
                    ctx.line(format!(".equ {name}, (1 << {shift})"));
                }
                // .equ expressions are evaluated with C operator syntax
                for (name, composite) in composites {
                    let expr = compose(&CEmitter, composite)?;
                    ctx.line(format!(".equ {name}, ({expr})"));
                }
            }
            DefinitionKind::Aliases { values, .. } => {
                for (name, value) in values {
                    ctx.line(format!(".equ {name}, {value}"));
                }
            }
        }
        Ok(ctx.finish())
    }

    fn footer(&self, _target: &Path) -> String {
        "    .endif".to_string()
    }
}

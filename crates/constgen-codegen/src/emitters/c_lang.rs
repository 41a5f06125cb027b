use std::path::Path;

use constgen_schema::{CompositionOp, Definition, DefinitionKind, Language};

use super::{compose, enumerate_values, file_guard};
use crate::error::CodegenError;
use crate::traits::LanguageEmitter;

/// C header emitter.
pub struct CEmitter;

impl CEmitter {
    fn include_guard(target: &Path) -> String {
        format!("{}_H", file_guard(target))
    }
}

impl LanguageEmitter for CEmitter {
    fn language(&self) -> Language {
        Language::C
    }

    fn file_extension(&self) -> &str {
        "h"
    }

    fn comment_prefix(&self) -> &str {
        "//"
    }

    fn compose_token(&self, op: CompositionOp) -> Option<&str> {
        match op {
            CompositionOp::Or => Some("|"),
        }
    }

    fn header(&self, target: &Path, origin: &Path) -> String {
        let guard = Self::include_guard(target);
        let mut ctx = self.new_context();
        self.emit_banner(origin, &mut ctx);
        ctx.blank();
        ctx.line(format!("#ifndef {guard}"));
        ctx.line(format!("#define {guard}"));
        ctx.finish()
    }

    fn content(&self, def: &Definition) -> Result<String, CodegenError> {
        let mut ctx = self.new_context();
        match &def.kind {
            DefinitionKind::Enum {
                values,
                overrides,
                as_preproc,
            } => {
                let indexed = enumerate_values(values, overrides)?;
                if *as_preproc {
                    for (name, index) in indexed {
                        ctx.line(format!("#define {name} {index}"));
                    }
                } else {
                    ctx.line(format!("enum {} {{", def.symbol_name()));
                    ctx.push_indent();
                    for (name, index) in indexed {
                        ctx.line(format!("{name} = {index},"));
                    }
                    ctx.pop_indent();
                    ctx.line("};");
                }
            }
            DefinitionKind::Flags {
                zero,
                bits,
                composites,
            } => {
                ctx.line(format!("#define {zero} 0"));
                for (shift, name) in bits.iter().enumerate() {
                    ctx.line(format!("#define {name} (1 << {shift})"));
                }
                for (name, composite) in composites {
                    let expr = compose(self, composite)?;
                    ctx.line(format!("#define {name} ({expr})"));
                }
            }
            DefinitionKind::Aliases { values, as_preproc } => {
                if *as_preproc {
                    for (name, value) in values {
                        ctx.line(format!("#define {name} {value}"));
                    }
                } else {
                    ctx.line(format!("enum {} {{", def.symbol_name()));
                    ctx.push_indent();
                    for (name, value) in values {
                        ctx.line(format!("{name} = {value},"));
                    }
                    ctx.pop_indent();
                    ctx.line("};");
                }
            }
        }
        Ok(ctx.finish())
    }

    fn footer(&self, _target: &Path) -> String {
        "#endif".to_string()
    }
}

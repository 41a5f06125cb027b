use std::path::Path;

use constgen_schema::{AliasValue, CompositionOp, Definition, DefinitionKind, Language};

use super::{compose, enumerate_values};
use crate::error::CodegenError;
use crate::traits::LanguageEmitter;

/// Python module emitter.
///
/// Every definition becomes an `enum` class named after the definition;
/// flags subclass `enum.IntFlag` so composites can be built with `|`.
pub struct PythonEmitter;

impl LanguageEmitter for PythonEmitter {
    fn language(&self) -> Language {
        Language::Py
    }

    fn file_extension(&self) -> &str {
        "py"
    }

    fn comment_prefix(&self) -> &str {
        "#"
    }

    fn compose_token(&self, op: CompositionOp) -> Option<&str> {
        match op {
            CompositionOp::Or => Some("|"),
        }
    }

    fn header(&self, _target: &Path, origin: &Path) -> String {
        let mut ctx = self.new_context();
        self.emit_banner(origin, &mut ctx);
        ctx.blank();
        ctx.line("import enum");
        ctx.finish()
    }

    fn content(&self, def: &Definition) -> Result<String, CodegenError> {
        let mut ctx = self.new_context();
        let class = def.symbol_name();
        match &def.kind {
            DefinitionKind::Enum {
                values, overrides, ..
            } => {
                ctx.line(format!("class {class}(enum.Enum):"));
                ctx.push_indent();
                for (name, index) in enumerate_values(values, overrides)? {
                    ctx.line(format!("{name} = {index}"));
                }
            }
            DefinitionKind::Flags {
                zero,
                bits,
                composites,
            } => {
                ctx.line(format!("class {class}(enum.IntFlag):"));
                ctx.push_indent();
                ctx.line(format!("{zero} = 0"));
                for (shift, name) in bits.iter().enumerate() {
                    ctx.line(format!("{name} = 1 << {shift}"));
                }
                for (name, composite) in composites {
                    let expr = compose(self, composite)?;
                    ctx.line(format!("{name} = {expr}"));
                }
            }
            DefinitionKind::Aliases { values, .. } => {
                ctx.line(format!("class {class}(enum.Enum):"));
                ctx.push_indent();
                for (name, value) in values {
                    ctx.line(format!("{name} = {}", py_literal(value)));
                }
            }
        }
        Ok(ctx.finish())
    }

    fn footer(&self, _target: &Path) -> String {
        String::new()
    }
}

/// Python spelling of an alias literal; JSON keywords map to Python's.
fn py_literal(value: &AliasValue) -> String {
    match value {
        AliasValue::Bool(true) => "True".to_string(),
        AliasValue::Bool(false) => "False".to_string(),
        AliasValue::Null => "None".to_string(),
        other => other.to_string(),
    }
}

pub mod asm;
pub mod c_lang;
pub mod python;

use std::path::{Component, Path, PathBuf};
use std::sync::OnceLock;

use constgen_schema::{Composite, Language};
use indexmap::IndexMap;
use regex::Regex;

use crate::error::CodegenError;
use crate::traits::LanguageEmitter;

/// Create the appropriate language emitter for the given language.
pub fn create_emitter(language: Language) -> Box<dyn LanguageEmitter> {
    match language {
        Language::C => Box::new(c_lang::CEmitter),
        Language::Asm => Box::new(asm::AsmEmitter),
        Language::Py => Box::new(python::PythonEmitter),
    }
}

/// Derive an include-guard stem from a target path.
///
/// Words are split on `-`, whitespace and case transitions, joined with
/// `_` and uppercased; path separators and dots become `__`.
/// e.g., "include/MyConsts" → "INCLUDE___MY_CONSTS"
pub fn file_guard(target: &Path) -> String {
    static CAPS_RUN: OnceLock<Regex> = OnceLock::new();
    static CAP_WORD: OnceLock<Regex> = OnceLock::new();
    let caps_run = CAPS_RUN.get_or_init(|| Regex::new(r"([A-Z]+)").expect("literal regex"));
    let cap_word = CAP_WORD.get_or_init(|| Regex::new(r"([A-Z][a-z]+)").expect("literal regex"));

    let normalized: PathBuf = target
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    let raw = normalized.to_string_lossy().replace('-', " ");

    let spaced = caps_run.replace_all(&raw, " ${1}");
    let spaced = cap_word.replace_all(&spaced, " ${1}");

    spaced
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
        .to_uppercase()
        .replace(['/', '.'], "__")
}

/// Pair each enum value with its index.
///
/// Indices count up from 0; a value named in `overrides` restarts the count
/// at the override. A value whose index would pass `i64::MAX` is an error.
pub fn enumerate_values<'a>(
    values: &'a [String],
    overrides: &IndexMap<String, i64>,
) -> Result<Vec<(&'a str, i64)>, CodegenError> {
    // `None` once the counter has run past i64::MAX
    let mut next = Some(0i64);
    values
        .iter()
        .map(|value| {
            let index = match overrides.get(value) {
                Some(&start) => start,
                None => next.ok_or_else(|| CodegenError::IndexOverflow {
                    name: value.clone(),
                })?,
            };
            next = index.checked_add(1);
            Ok((value.as_str(), index))
        })
        .collect()
}

/// Join a composite's components with the emitter's operator token.
pub fn compose(
    emitter: &dyn LanguageEmitter,
    composite: &Composite,
) -> Result<String, CodegenError> {
    let token = emitter
        .compose_token(composite.op)
        .ok_or(CodegenError::UnsupportedComposition {
            language: emitter.language(),
            op: composite.op,
        })?;
    Ok(composite.components.join(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use constgen_schema::CompositionOp;

    #[test]
    fn test_file_guard_splits_camel_case() {
        assert_eq!(file_guard(Path::new("include/MyConsts")), "INCLUDE___MY_CONSTS");
    }

    #[test]
    fn test_file_guard_dashes_and_acronyms() {
        assert_eq!(file_guard(Path::new("gen/kernel-flags")), "GEN__KERNEL_FLAGS");
        assert_eq!(file_guard(Path::new("HTTPStatus")), "HTTP_STATUS");
    }

    #[test]
    fn test_file_guard_ignores_current_dir() {
        assert_eq!(file_guard(Path::new("./consts")), "CONSTS");
        assert_eq!(file_guard(Path::new("./out/./consts")), "OUT__CONSTS");
    }

    #[test]
    fn test_file_guard_dots() {
        assert_eq!(file_guard(Path::new("v1.2/consts")), "V1__2__CONSTS");
    }

    #[test]
    fn test_enumerate_values_sequential() {
        let values = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let indexed = enumerate_values(&values, &IndexMap::new()).unwrap();
        assert_eq!(indexed, vec![("A", 0), ("B", 1), ("C", 2)]);
    }

    #[test]
    fn test_enumerate_values_override_restarts() {
        let values = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        let mut overrides = IndexMap::new();
        overrides.insert("B".to_string(), 10);
        let indexed = enumerate_values(&values, &overrides).unwrap();
        assert_eq!(indexed, vec![("A", 0), ("B", 10), ("C", 11)]);
    }

    #[test]
    fn test_enumerate_values_override_first_and_negative() {
        let values = vec!["LOW".to_string(), "MID".to_string(), "HIGH".to_string()];
        let mut overrides = IndexMap::new();
        overrides.insert("LOW".to_string(), -1);
        overrides.insert("HIGH".to_string(), 100);
        let indexed = enumerate_values(&values, &overrides).unwrap();
        assert_eq!(indexed, vec![("LOW", -1), ("MID", 0), ("HIGH", 100)]);
    }

    #[test]
    fn test_enumerate_values_override_at_max() {
        let values = vec!["A".to_string(), "LAST".to_string()];
        let mut overrides = IndexMap::new();
        overrides.insert("LAST".to_string(), i64::MAX);
        let indexed = enumerate_values(&values, &overrides).unwrap();
        assert_eq!(indexed, vec![("A", 0), ("LAST", i64::MAX)]);
    }

    #[test]
    fn test_enumerate_values_past_max() {
        let values = vec!["LAST".to_string(), "AFTER".to_string(), "RESET".to_string()];
        let mut overrides = IndexMap::new();
        overrides.insert("LAST".to_string(), i64::MAX);
        let err = enumerate_values(&values, &overrides).unwrap_err();
        assert!(matches!(err, CodegenError::IndexOverflow { ref name } if name == "AFTER"));

        // an override after the maximum restarts the count
        let values = vec!["LAST".to_string(), "RESET".to_string(), "NEXT".to_string()];
        overrides.insert("RESET".to_string(), 0);
        let indexed = enumerate_values(&values, &overrides).unwrap();
        assert_eq!(indexed, vec![("LAST", i64::MAX), ("RESET", 0), ("NEXT", 1)]);
    }

    #[test]
    fn test_compose_unsupported() {
        let composite = Composite {
            components: vec!["A".to_string(), "B".to_string()],
            op: CompositionOp::Or,
        };
        let err = compose(&asm::AsmEmitter, &composite).unwrap_err();
        assert!(matches!(
            err,
            CodegenError::UnsupportedComposition {
                language: Language::Asm,
                op: CompositionOp::Or
            }
        ));
        assert_eq!(compose(&c_lang::CEmitter, &composite).unwrap(), "A|B");
    }

    #[test]
    fn test_create_emitter_extensions() {
        assert_eq!(create_emitter(Language::C).file_extension(), "h");
        assert_eq!(create_emitter(Language::Asm).file_extension(), "inc");
        assert_eq!(create_emitter(Language::Py).file_extension(), "py");
    }
}

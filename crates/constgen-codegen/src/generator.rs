use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use constgen_schema::{Language, Schema, Target};

use crate::emitters;
use crate::error::CodegenError;
use crate::traits::LanguageEmitter;

/// A collection of generated files, keyed by path relative to the output root.
#[derive(Debug, Clone, Default)]
pub struct GeneratedFiles {
    /// Files keyed by relative path (sorted for deterministic output)
    files: BTreeMap<PathBuf, String>,
}

impl GeneratedFiles {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file to the set, replacing any earlier file at the same path.
    pub fn add_file(&mut self, path: impl Into<PathBuf>, content: impl Into<String>) {
        self.files.insert(path.into(), content.into());
    }

    /// Get all generated files.
    pub fn files(&self) -> &BTreeMap<PathBuf, String> {
        &self.files
    }

    /// Number of generated files.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Write all generated files under the given root, creating parent
    /// directories as needed.
    pub fn write_to_disk(&self, root: &Path) -> Result<(), std::io::Error> {
        for (rel_path, content) in &self.files {
            let full_path = root.join(rel_path);
            if let Some(parent) = full_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&full_path, content)?;
            tracing::info!(path = %full_path.display(), bytes = content.len(), "wrote file");
        }
        Ok(())
    }
}

/// Renders every target of a schema once per requested language.
pub struct ConstGenerator {
    emitters: Vec<Box<dyn LanguageEmitter>>,
}

impl std::fmt::Debug for ConstGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let languages: Vec<Language> = self.emitters.iter().map(|e| e.language()).collect();
        f.debug_struct("ConstGenerator")
            .field("languages", &languages)
            .finish()
    }
}

impl ConstGenerator {
    /// Create a generator for the given languages, in order.
    pub fn new(languages: &[Language]) -> Self {
        let emitters = languages
            .iter()
            .map(|&lang| emitters::create_emitter(lang))
            .collect();
        Self { emitters }
    }

    /// Render all targets × languages.
    ///
    /// `origin` is the manifest named in each file's banner; `root` is the
    /// output root, which also feeds the include guards.
    pub fn generate(
        &self,
        schema: &Schema,
        origin: &Path,
        root: &Path,
    ) -> Result<GeneratedFiles, CodegenError> {
        let mut output = GeneratedFiles::new();

        for target in schema.targets().values() {
            let target_path = root.join(&target.path);
            for emitter in &self.emitters {
                let code =
                    self.render_target(emitter.as_ref(), schema, target, &target_path, origin)?;
                let rel_path = Path::new(&target.path).with_extension(emitter.file_extension());
                tracing::debug!(
                    target = %target.path,
                    language = %emitter.language(),
                    path = %rel_path.display(),
                    "rendered target"
                );
                output.add_file(rel_path, code);
            }
        }

        Ok(output)
    }

    /// Header, every definition in target order, then footer, each
    /// terminated by a newline.
    fn render_target(
        &self,
        emitter: &dyn LanguageEmitter,
        schema: &Schema,
        target: &Target,
        target_path: &Path,
        origin: &Path,
    ) -> Result<String, CodegenError> {
        let mut code = emitter.header(target_path, origin);
        code.push('\n');

        for def in schema.definitions_for(target) {
            code.push_str(&emitter.content(def)?);
            code.push('\n');
        }

        code.push_str(&emitter.footer(target_path));
        code.push('\n');
        Ok(code)
    }

    /// Languages this generator renders, in order.
    pub fn languages(&self) -> Vec<Language> {
        self.emitters.iter().map(|e| e.language()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const MANIFEST: &str = r##"{
        "definitions": {
            "#Color": { "type": "enum", "values": ["RED", "GREEN"] },
            "#Perm": { "type": "flags", "values": ["NONE", "READ"] }
        },
        "targets": { "include": { "Colors": ["#Color"], "perms": ["#Perm", "#Color"] } }
    }"##;

    #[test]
    fn test_generated_files_basics() {
        let mut files = GeneratedFiles::new();
        files.add_file("consts.h", "#endif\n");
        files.add_file("consts.py", "\n");
        assert_eq!(files.file_count(), 2);
        assert!(files.files().contains_key(Path::new("consts.h")));
    }

    #[test]
    fn test_generated_files_write_to_disk() {
        let mut files = GeneratedFiles::new();
        files.add_file("include/deep/consts.h", "#endif\n");

        let dir = tempfile::tempdir().unwrap();
        files.write_to_disk(dir.path()).unwrap();

        let content = std::fs::read_to_string(dir.path().join("include/deep/consts.h")).unwrap();
        assert_eq!(content, "#endif\n");
    }

    #[test]
    fn test_generate_one_file_per_target_and_language() {
        let schema: Schema = MANIFEST.parse().unwrap();
        let gen = ConstGenerator::new(&[Language::C, Language::Py]);
        let output = gen.generate(&schema, Path::new("m.json"), Path::new(".")).unwrap();

        let paths: Vec<&Path> = output.files().keys().map(|p| p.as_path()).collect();
        assert_eq!(
            paths,
            vec![
                Path::new("include/Colors.h"),
                Path::new("include/Colors.py"),
                Path::new("include/perms.h"),
                Path::new("include/perms.py"),
            ]
        );
    }

    #[test]
    fn test_generate_file_layout() {
        let schema: Schema = MANIFEST.parse().unwrap();
        let gen = ConstGenerator::new(&[Language::C]);
        let output = gen.generate(&schema, Path::new("m.json"), Path::new(".")).unwrap();

        let expected = "\
// THIS FILE WAS GENERATED WITH CONSTGEN; DO NOT MANUALLY MODIFY IT
// CONSTANTS ORIGIN FILE: m.json

#ifndef INCLUDE___COLORS_H
#define INCLUDE___COLORS_H

enum Color {
    RED = 0,
    GREEN = 1,
};

#endif
";
        assert_eq!(output.files()[Path::new("include/Colors.h")], expected);
    }

    #[test]
    fn test_generate_guard_includes_root() {
        let schema: Schema = MANIFEST.parse().unwrap();
        let gen = ConstGenerator::new(&[Language::Asm]);
        let output = gen.generate(&schema, Path::new("m.json"), Path::new("out")).unwrap();

        let perms = &output.files()[Path::new("include/perms.inc")];
        assert!(perms.contains("    .ifndef OUT__INCLUDE__PERMS_INC\n"));
        assert!(perms.ends_with("    .endif\n"));
    }

    #[test]
    fn test_debug_lists_languages() {
        let gen = ConstGenerator::new(&[Language::Asm, Language::Py]);
        assert_eq!(gen.languages(), vec![Language::Asm, Language::Py]);
        assert!(format!("{:?}", gen).contains("Asm"));
    }
}

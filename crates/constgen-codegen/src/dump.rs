use std::path::Path;

use constgen_schema::{Language, Schema};

use crate::error::CodegenError;
use crate::generator::{ConstGenerator, GeneratedFiles};

/// Render a schema for each language and write the files under `root`.
///
/// Everything is rendered before the first write, so an emitter error
/// leaves the output root untouched.
pub fn dump(
    schema: &Schema,
    origin: &Path,
    languages: &[Language],
    root: &Path,
) -> Result<GeneratedFiles, CodegenError> {
    let generator = ConstGenerator::new(languages);
    let files = generator.generate(schema, origin, root)?;
    files.write_to_disk(root)?;
    Ok(files)
}

/// Load a manifest and [`dump`] it.
pub fn dump_from_file(
    manifest: &Path,
    languages: &[Language],
    root: &Path,
) -> Result<GeneratedFiles, CodegenError> {
    let schema = Schema::from_file(manifest)?;
    dump(&schema, manifest, languages, root)
}

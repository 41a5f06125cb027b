use std::path::Path;

use crate::types::error::SchemaError;
use crate::types::schema::Schema;

impl Schema {
    /// Load a manifest file.
    ///
    /// A manifest without `targets` gets a single target named after the
    /// file stem that holds every definition, so `consts.json` dumps to
    /// `consts.h`, `consts.py` and so on.
    pub fn from_file(path: &Path) -> Result<Self, SchemaError> {
        let content = std::fs::read_to_string(path).map_err(|source| SchemaError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let schema: Schema = content.parse()?;
        let stem = default_target_path(path);
        let schema = schema.with_default_target(stem);

        tracing::debug!(
            manifest = %path.display(),
            definitions = schema.definitions().len(),
            targets = schema.targets().len(),
            "loaded manifest"
        );

        Ok(schema)
    }
}

/// Target path used when a manifest declares no targets of its own.
pub fn default_target_path(manifest: &Path) -> String {
    manifest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "consts".to_string())
}

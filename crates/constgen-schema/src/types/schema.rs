use indexmap::IndexMap;

use super::definition::Definition;

/// An output file (path relative to the output root, no extension) and the
/// definitions emitted into it, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub path: String,
    pub def_keys: Vec<String>,
}

/// A loaded manifest. Definitions and targets keep manifest order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Schema {
    definitions: IndexMap<String, Definition>,
    targets: IndexMap<String, Target>,
}

impl Schema {
    pub(crate) fn new(
        definitions: IndexMap<String, Definition>,
        targets: IndexMap<String, Target>,
    ) -> Self {
        Self {
            definitions,
            targets,
        }
    }

    pub fn definitions(&self) -> &IndexMap<String, Definition> {
        &self.definitions
    }

    pub fn definition(&self, key: &str) -> Option<&Definition> {
        self.definitions.get(key)
    }

    /// Definitions listed by `target`, in target order.
    ///
    /// Target keys are checked against the definitions when the schema is
    /// built, so every key resolves.
    pub fn definitions_for<'a>(
        &'a self,
        target: &'a Target,
    ) -> impl Iterator<Item = &'a Definition> + 'a {
        target
            .def_keys
            .iter()
            .filter_map(|key| self.definitions.get(key))
    }

    pub fn targets(&self) -> &IndexMap<String, Target> {
        &self.targets
    }

    /// Add a single target holding every definition when the manifest
    /// declares none. Schemas that already have targets are returned as-is.
    pub fn with_default_target(mut self, path: impl Into<String>) -> Self {
        if self.targets.is_empty() {
            let path = path.into();
            let def_keys = self.definitions.keys().cloned().collect();
            self.targets.insert(path.clone(), Target { path, def_keys });
        }
        self
    }
}

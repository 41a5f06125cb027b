use std::str::FromStr;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;

use crate::types::definition::{
    AliasValue, Composite, CompositionOp, ConstType, Definition, DefinitionKind,
};
use crate::types::error::SchemaError;
use crate::types::schema::{Schema, Target};

/// Separator used when flattening nested `targets` into paths
pub const TARGET_SEPARATOR: char = '/';

#[derive(Debug, Deserialize)]
struct RawManifest {
    definitions: Option<IndexMap<String, RawDefinition>>,
    #[serde(default)]
    targets: Option<IndexMap<String, RawTargetNode>>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawTargetNode {
    Keys(Vec<String>),
    Nested(IndexMap<String, RawTargetNode>),
    Invalid(serde::de::IgnoredAny),
}

#[derive(Debug, Deserialize)]
struct RawDefinition {
    #[serde(rename = "type")]
    type_name: String,
    /// Kept raw until the type is known; its shape depends on it.
    values: Option<Box<RawValue>>,
    #[serde(default)]
    composites: IndexMap<String, RawComposite>,
    #[serde(default)]
    as_preproc: bool,
    #[serde(default)]
    overrides: IndexMap<String, i64>,
}

#[derive(Debug, Deserialize)]
struct RawComposite {
    components: Vec<String>,
    op: String,
}

impl Schema {
    /// Build a schema from an already-parsed JSON document.
    pub fn from_value(value: Value) -> Result<Self, SchemaError> {
        // Raw `values` need source text, so go back through the string form.
        serde_json::to_string(&value)?.parse()
    }
}

impl FromStr for Schema {
    type Err = SchemaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw: RawManifest = serde_json::from_str(s)?;
        build_schema(raw)
    }
}

fn build_schema(raw: RawManifest) -> Result<Schema, SchemaError> {
    let raw_defs = raw.definitions.ok_or(SchemaError::MissingDefinitions)?;

    let mut definitions = IndexMap::with_capacity(raw_defs.len());
    for (key, raw_def) in raw_defs {
        let def = build_definition(&key, raw_def)?;
        definitions.insert(key, def);
    }

    let mut targets = IndexMap::new();
    if let Some(raw_targets) = raw.targets {
        let mut flat = Vec::new();
        flatten_targets(raw_targets, "", &mut flat);
        for (path, node) in flat {
            let target = build_target(path, node)?;
            if let Some(missing) = target
                .def_keys
                .iter()
                .find(|k| !definitions.contains_key(k.as_str()))
            {
                return Err(SchemaError::UnknownDefinition {
                    target: target.path.clone(),
                    key: missing.clone(),
                });
            }
            targets.insert(target.path.clone(), target);
        }
    }

    Ok(Schema::new(definitions, targets))
}

fn build_definition(key: &str, raw: RawDefinition) -> Result<Definition, SchemaError> {
    let const_type = ConstType::parse(&raw.type_name).ok_or_else(|| SchemaError::UnknownType {
        key: key.to_string(),
        type_name: raw.type_name.clone(),
    })?;

    let values = raw.values.ok_or_else(|| SchemaError::MissingValues {
        key: key.to_string(),
    })?;

    let kind = match const_type {
        ConstType::Enum => DefinitionKind::Enum {
            values: parse_names(key, &values)?,
            overrides: raw.overrides,
            as_preproc: raw.as_preproc,
        },
        ConstType::Flags => {
            let mut values = parse_names(key, &values)?.into_iter();
            let zero = values.next().ok_or_else(|| SchemaError::EmptyFlags {
                key: key.to_string(),
            })?;
            let mut composites = IndexMap::with_capacity(raw.composites.len());
            for (name, comp) in raw.composites {
                let op = CompositionOp::parse(&comp.op).ok_or_else(|| {
                    SchemaError::UnknownOperator {
                        key: key.to_string(),
                        composite: name.clone(),
                        op: comp.op.clone(),
                    }
                })?;
                composites.insert(
                    name,
                    Composite {
                        components: comp.components,
                        op,
                    },
                );
            }
            DefinitionKind::Flags {
                zero,
                bits: values.collect(),
                composites,
            }
        }
        ConstType::Aliases => DefinitionKind::Aliases {
            values: parse_literals(key, &values)?,
            as_preproc: raw.as_preproc,
        },
    };

    Ok(Definition::new(key, kind))
}

fn parse_names(key: &str, raw: &RawValue) -> Result<Vec<String>, SchemaError> {
    serde_json::from_str(raw.get()).map_err(|_| SchemaError::ValuesShape {
        key: key.to_string(),
        expected: "a list of names",
    })
}

fn parse_literals(
    key: &str,
    raw: &RawValue,
) -> Result<IndexMap<String, AliasValue>, SchemaError> {
    let shape_error = || SchemaError::ValuesShape {
        key: key.to_string(),
        expected: "a mapping of names to number, string, boolean or null literals",
    };

    let entries: IndexMap<String, Box<RawValue>> =
        serde_json::from_str(raw.get()).map_err(|_| shape_error())?;
    entries
        .into_iter()
        .map(|(name, literal)| {
            AliasValue::from_raw(&literal)
                .map(|value| (name, value))
                .ok_or_else(shape_error)
        })
        .collect()
}

/// Flatten nested target mappings into `a/b/c -> leaf` pairs.
fn flatten_targets(
    nodes: IndexMap<String, RawTargetNode>,
    parent: &str,
    out: &mut Vec<(String, RawTargetNode)>,
) {
    for (key, node) in nodes {
        let path = if parent.is_empty() {
            key
        } else {
            format!("{parent}{TARGET_SEPARATOR}{key}")
        };
        match node {
            RawTargetNode::Nested(children) => flatten_targets(children, &path, out),
            leaf => out.push((path, leaf)),
        }
    }
}

fn build_target(path: String, node: RawTargetNode) -> Result<Target, SchemaError> {
    match node {
        RawTargetNode::Keys(def_keys) => Ok(Target { path, def_keys }),
        RawTargetNode::Nested(_) | RawTargetNode::Invalid(_) => {
            Err(SchemaError::InvalidTarget { path })
        }
    }
}

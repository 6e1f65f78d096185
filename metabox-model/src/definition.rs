//! Loading a metabox from a TOML definition file.
//!
//! ```toml
//! [metabox]
//! id = "product_attributes"
//! post_type = "product"
//!
//! [[fields]]
//! key = "sku"
//! label = "SKU"
//! kind = "input"
//! constraints = "required"
//! transform = "trim"
//! ```

use crate::config::MetaBoxConfig;
use crate::error::ModelResult;
use crate::schema::{Constraints, FieldDescriptor, FieldKind, FieldOptions, FieldSchema};
use crate::transform::TransformRegistry;
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// A metabox's configuration together with its field schema.
#[derive(Debug, Clone)]
pub struct MetaBoxDefinition {
    pub config: MetaBoxConfig,
    pub schema: FieldSchema,
}

/// On-disk layout of a definition file.
#[derive(Debug, Deserialize)]
struct DefinitionFile {
    metabox: MetaBoxConfig,
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
struct FieldEntry {
    key: String,
    #[serde(default)]
    label: String,
    kind: String,
    #[serde(default)]
    constraints: String,
    #[serde(default)]
    options: Option<FieldOptions>,
    #[serde(default)]
    transform: Option<String>,
    #[serde(default)]
    args: Vec<String>,
}

impl FieldEntry {
    fn into_descriptor(self, registry: &TransformRegistry) -> ModelResult<FieldDescriptor> {
        let kind = FieldKind::from_name(&self.kind, self.options.clone().unwrap_or_default());
        if self.options.is_some() && kind.options().is_none() {
            warn!(field = %self.key, kind = %self.kind, "Options ignored for non-choice field");
        }
        if let FieldKind::Unsupported { name } = &kind {
            warn!(
                field = %self.key,
                kind = %name,
                "Unsupported field kind, field will render empty"
            );
        }

        let transform = match self.transform {
            Some(name) => Some(registry.resolve(&self.key, &name, self.args)?),
            None => None,
        };

        Ok(FieldDescriptor {
            key: self.key,
            label: self.label,
            kind,
            constraints: Constraints::new(self.constraints),
            transform,
        })
    }
}

impl MetaBoxDefinition {
    pub fn new(config: MetaBoxConfig, schema: FieldSchema) -> Self {
        Self { config, schema }
    }

    /// Parses a definition from TOML text, resolving transforms against `registry`.
    pub fn from_toml_str(contents: &str, registry: &TransformRegistry) -> ModelResult<Self> {
        let file: DefinitionFile = toml::from_str(contents)?;
        let fields = file
            .fields
            .into_iter()
            .map(|entry| entry.into_descriptor(registry))
            .collect::<ModelResult<Vec<_>>>()?;
        Ok(Self {
            config: file.metabox,
            schema: FieldSchema::new(fields)?,
        })
    }

    /// Reads and parses a definition file.
    pub fn load_from(path: &Path, registry: &TransformRegistry) -> ModelResult<Self> {
        let contents = std::fs::read_to_string(path)?;
        let definition = Self::from_toml_str(&contents, registry)?;
        info!(
            path = %path.display(),
            metabox_id = %definition.config.id,
            fields = definition.schema.len(),
            "Loaded metabox definition"
        );
        Ok(definition)
    }
}

use crate::error::MetaBoxResult;
use crate::render::MetaboxRenderer;
use metabox_host::{AdminScreen, Hook, HookRegistry, Host};
use metabox_model::{FieldSchema, MetaBoxConfig, MetaBoxDefinition, TransformRegistry};
use metabox_types::ItemId;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

const HOOKS: [Hook; 3] = [Hook::AddMetaBoxes, Hook::SavePost, Hook::PostUpdatedMessages];

/// A form section attached to the edit screen of one content type.
#[derive(Debug, Clone)]
pub struct MetaBox {
    config: MetaBoxConfig,
    schema: FieldSchema,
}

impl MetaBox {
    pub fn new(config: MetaBoxConfig, schema: FieldSchema) -> Self {
        Self { config, schema }
    }

    pub fn from_definition(definition: MetaBoxDefinition) -> Self {
        Self::new(definition.config, definition.schema)
    }

    /// Loads a metabox from a TOML definition file.
    pub fn load_from(path: &Path, transforms: &TransformRegistry) -> MetaBoxResult<Self> {
        Ok(Self::from_definition(MetaBoxDefinition::load_from(path, transforms)?))
    }

    pub fn id(&self) -> &str {
        &self.config.id
    }

    pub fn config(&self) -> &MetaBoxConfig {
        &self.config
    }

    pub fn schema(&self) -> &FieldSchema {
        &self.schema
    }

    /// Name this metabox's handler uses on `hook`.
    pub fn handler_name(&self, hook: Hook) -> String {
        format!("{}::{}", self.config.id, hook)
    }

    /// Attaches the render, save and message handlers.
    pub fn register(&self, hooks: &dyn HookRegistry) {
        for hook in HOOKS {
            hooks.add(hook, &self.handler_name(hook));
        }
    }

    pub fn unregister(&self, hooks: &dyn HookRegistry) {
        for hook in HOOKS {
            hooks.remove(hook, &self.handler_name(hook));
        }
    }

    /// Places this metabox on the edit screen.
    pub fn add_meta_boxes(&self, screen: &dyn AdminScreen) {
        screen.add_meta_box(&self.config);
    }

    /// Transient key holding the failed-save message for `item`.
    pub fn transient_key(&self, item: ItemId) -> String {
        format!("{}_error_message_{}", self.config.id, item)
    }

    /// Stored values of every schema field; unreadable or missing ones are empty.
    pub fn current_values(&self, host: &Host, item: ItemId) -> HashMap<String, String> {
        self.schema
            .keys()
            .map(|key| {
                let value = match host.attributes.get(item, key) {
                    Ok(value) => value.unwrap_or_default(),
                    Err(e) => {
                        warn!(
                            metabox_id = self.id(),
                            %item,
                            key,
                            error = %e,
                            "Attribute read failed"
                        );
                        String::new()
                    }
                };
                (key.to_string(), value)
            })
            .collect()
    }

    /// Renders the metabox for `item` from its stored attributes.
    pub fn render(&self, host: &Host, item: ItemId) -> String {
        debug!(metabox_id = self.id(), %item, fields = self.schema.len(), "Rendering metabox");
        let values = self.current_values(host, item);
        MetaboxRenderer::new(host.escaper.as_ref(), host.editor.as_ref())
            .render(&self.schema, &values)
    }
}

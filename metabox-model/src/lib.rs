//! Declarative model for metabox forms.
//!
//! Defines the types every other crate consumes:
//! - [`FieldSchema`]: the ordered, immutable list of fields a metabox shows
//! - [`FieldDescriptor`] / [`FieldKind`]: one field and its control type
//! - [`Transform`]: a sanitizer applied to submitted data before it is stored
//! - [`MetaBoxConfig`]: id, title, target content type and layout hints
//! - [`MetaBoxDefinition`]: config plus schema, loadable from a TOML file
//!
//! These types carry no behavior beyond validation of their own invariants.
//! Rendering and persistence live in the `metabox` crate.

mod config;
mod definition;
mod error;
mod schema;
mod transform;

pub use config::{Context, MetaBoxConfig, Priority, DEFAULT_TITLE};
pub use definition::MetaBoxDefinition;
pub use error::{ModelError, ModelResult};
pub use schema::{Constraints, FieldDescriptor, FieldKind, FieldOptions, FieldSchema};
pub use transform::{Transform, TransformFn, TransformRegistry};

//! Configurable admin-panel metaboxes for content editing screens.
//!
//! A [`MetaBox`] pairs a [`MetaBoxConfig`] with a [`FieldSchema`] and runs
//! the round trip between the two host events it cares about:
//! - render: stored attributes become form markup ([`MetaboxRenderer`])
//! - save: submitted form data is filtered, transformed, checked for
//!   required values and written back as attributes ([`MetaBox::persist`])
//!
//! A failed required check forces the item back to draft and leaves an
//! aggregated message in the transient store; the next message composition
//! surfaces it once ([`MetaBox::resolve_display_message`]).
//!
//! Construction has no side effects. Call [`MetaBox::register`] (or add the
//! metabox to a [`MetaBoxRegistry`]) to attach it to the host's hooks.

mod error;
mod messages;
mod metabox;
mod persist;
mod registry;
mod render;

pub use error::{MetaBoxError, MetaBoxResult};
pub use messages::{UpdatedMessages, DEFAULT_MESSAGE_INDEX};
pub use metabox::MetaBox;
pub use persist::{
    stage_fields, PersistOutcome, SaveReport, SkipReason, StagedFields, ERROR_LINE_BREAK,
    ERROR_TTL, SAVE_FAILED_HEADER,
};
pub use registry::MetaBoxRegistry;
pub use render::{MetaboxRenderer, REQUIRED_MARKER};

pub use metabox_host::{Host, Submission, SubmittedValue};
pub use metabox_model::{
    Context, FieldDescriptor, FieldKind, FieldSchema, MetaBoxConfig, MetaBoxDefinition, Priority,
    Transform, TransformRegistry,
};
pub use metabox_types::{ActorId, ItemId, ItemStatus};

//! Host platform collaborators.
//!
//! A metabox is a thin layer over services the host platform already
//! provides. Each service is a trait here:
//! - [`AttributeStore`]: per-item key/value attributes
//! - [`TransientStore`]: short-lived expiring values
//! - [`Escaper`]: attribute and text escaping for emitted markup
//! - [`DataFilter`]: third-party pre-processing of submitted values
//! - [`Authorizer`]: "may this actor edit this item"
//! - [`ItemUpdater`]: changes an item's status and persists it
//! - [`EditorWidget`]: renders the rich-text editor control
//! - [`HookRegistry`] / [`AdminScreen`]: extension points and screen registration
//!
//! [`Host`] bundles one implementation of each. The [`memory`] module holds
//! in-memory implementations for tests and embedding.

mod editor;
mod error;
mod escape;
mod filter;
mod hooks;
mod host;
pub mod memory;
mod services;
mod submission;

pub use editor::{EditorSettings, EditorWidget, TinyMceSettings, TextareaEditor, EDITOR_TOOLBAR};
pub use error::{HostError, HostResult};
pub use escape::{Escaper, HtmlEscaper};
pub use filter::{DataFilter, FilterChain, PassThrough};
pub use hooks::{AdminScreen, Hook, HookRegistry};
pub use host::Host;
pub use services::{AttributeStore, Authorizer, ItemUpdater, TransientStore};
pub use submission::{Submission, SubmittedValue};

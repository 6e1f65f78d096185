//! Core type definitions for the metabox helper.
//!
//! This crate defines the host-agnostic types shared by every other crate:
//! - Content item and actor identifiers (UUID v7)
//! - The publication status of a content item
//!
//! Field schemas and host collaborators live in `metabox-model` and
//! `metabox-host`, not here.

mod ids;
mod status;

pub use ids::{ActorId, ItemId};
pub use status::ItemStatus;

/// Errors from parsing identifiers and statuses.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid UUID: {0}")]
    InvalidUuid(#[from] uuid::Error),

    #[error("unknown item status: {0}")]
    UnknownStatus(String),
}

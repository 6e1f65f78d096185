//! Validates submitted form data and writes it back as item attributes.

use crate::metabox::MetaBox;
use indexmap::IndexMap;
use metabox_host::{DataFilter, Hook, Host, Submission};
use metabox_model::FieldSchema;
use metabox_types::{ActorId, ItemId, ItemStatus};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Separator appended after every aggregated error line.
pub const ERROR_LINE_BREAK: &str = "<br/>";

/// Prefix of the message stored for display after a failed save.
pub const SAVE_FAILED_HEADER: &str = "Saving failed.<br/>";

/// How long a failed-save message waits to be displayed.
pub const ERROR_TTL: Duration = Duration::from_secs(600);

/// Field values ready to be written, plus the aggregated required-field errors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedFields {
    /// `key -> value` in schema order.
    pub values: IndexMap<String, String>,
    /// One `"{label} cannot be empty<br/>"` line per violated required field.
    pub error_message: String,
}

/// Runs the per-field pipeline over every field of `schema`.
///
/// For each field: apply the host filter, flatten lists with `,`, apply the
/// field transform, then check the required constraint against the result.
/// A value that fails the required check is still staged.
pub fn stage_fields(
    schema: &FieldSchema,
    submission: &Submission,
    filter: &dyn DataFilter,
) -> StagedFields {
    let mut staged = StagedFields::default();
    for field in schema {
        let filtered = filter.filter(submission.value(&field.key), &field.key);
        let flattened = filtered.flatten();
        let value = match &field.transform {
            Some(transform) => transform.apply(&flattened),
            None => flattened,
        };

        if field.is_required() && (value.is_empty() || value == "-") {
            staged.error_message.push_str(&field.label);
            staged.error_message.push_str(" cannot be empty");
            staged.error_message.push_str(ERROR_LINE_BREAK);
        }

        staged.values.insert(field.key.clone(), value);
    }
    staged
}

/// Why a save was not processed at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The submission targets a different content type.
    WrongPostType,
    /// The actor may not edit the item.
    Unauthorized,
}

/// What a processed save did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    /// Keys written to the attribute store, in schema order.
    pub written: Vec<String>,
    /// Keys whose write failed.
    pub failed: Vec<String>,
    /// Aggregated required-field errors, without the header.
    pub error_message: Option<String>,
}

/// Result of [`MetaBox::persist`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistOutcome {
    /// Nothing was processed, stored or recorded.
    Skipped(SkipReason),
    /// The schema produced no values.
    NothingToSave,
    Saved(SaveReport),
}

impl PersistOutcome {
    /// True when a required field was empty and the item went back to draft.
    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Saved(report) if report.error_message.is_some())
    }

    pub fn report(&self) -> Option<&SaveReport> {
        match self {
            Self::Saved(report) => Some(report),
            _ => None,
        }
    }
}

impl MetaBox {
    /// Handles a save of `item` by `actor`.
    ///
    /// Does nothing unless the submission targets this metabox's content
    /// type and the actor may edit the item. Attribute writes are
    /// independent; a failed write is logged and the rest still run.
    pub fn persist(
        &self,
        host: &Host,
        item: ItemId,
        submission: &Submission,
        actor: ActorId,
    ) -> PersistOutcome {
        let metabox_id = self.id();
        if !submission.targets(&self.config().post_type) {
            debug!(metabox_id, %item, "Save skipped: submission targets another post type");
            return PersistOutcome::Skipped(SkipReason::WrongPostType);
        }
        if !host.authorizer.can_edit(actor, item) {
            debug!(metabox_id, %item, %actor, "Save skipped: actor may not edit item");
            return PersistOutcome::Skipped(SkipReason::Unauthorized);
        }

        let staged = stage_fields(self.schema(), submission, host.filter.as_ref());
        if staged.values.is_empty() {
            return PersistOutcome::NothingToSave;
        }

        let mut report = SaveReport::default();
        for (key, value) in &staged.values {
            match host.attributes.set(item, key, value) {
                Ok(()) => report.written.push(key.clone()),
                Err(e) => {
                    warn!(metabox_id, %item, key = %key, error = %e, "Attribute write failed");
                    report.failed.push(key.clone());
                }
            }
        }

        if staged.error_message.is_empty() {
            info!(metabox_id, %item, written = report.written.len(), "Metabox saved");
        } else {
            warn!(metabox_id, %item, "Required fields empty, reverting item to draft");
            self.revert_to_draft(host, item);
            self.store_error(host, item, &staged.error_message);
            report.error_message = Some(staged.error_message);
        }

        PersistOutcome::Saved(report)
    }

    /// Sets the item to draft with this metabox's save handler detached, so
    /// the host update does not re-enter [`MetaBox::persist`].
    fn revert_to_draft(&self, host: &Host, item: ItemId) {
        let handler = self.handler_name(Hook::SavePost);
        let was_registered = host.hooks.is_registered(Hook::SavePost, &handler);
        if was_registered {
            host.hooks.remove(Hook::SavePost, &handler);
        }

        if let Err(e) = host.items.update_status(item, ItemStatus::Draft) {
            warn!(metabox_id = self.id(), %item, error = %e, "Draft rollback failed");
        }

        if was_registered {
            host.hooks.add(Hook::SavePost, &handler);
        }
    }

    fn store_error(&self, host: &Host, item: ItemId, error_message: &str) {
        let message = format!("{SAVE_FAILED_HEADER}{error_message}");
        if let Err(e) = host.transients.set(&self.transient_key(item), &message, ERROR_TTL) {
            warn!(metabox_id = self.id(), %item, error = %e, "Failed to store save error message");
        }
    }
}

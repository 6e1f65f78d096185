//! Surfacing a failed save's message on the next screen view.

use crate::metabox::MetaBox;
use metabox_host::Host;
use metabox_types::ItemId;
use std::collections::BTreeMap;
use tracing::warn;

/// Post-save messages: `post type -> message index -> text`.
pub type UpdatedMessages = BTreeMap<String, BTreeMap<String, String>>;

/// Message index used when the request does not name one.
pub const DEFAULT_MESSAGE_INDEX: &str = "0";

impl MetaBox {
    /// Returns the stored failed-save message for `item` and clears it.
    ///
    /// A second call returns `None` until the next failed save.
    pub fn resolve_display_message(&self, host: &Host, item: ItemId) -> Option<String> {
        let key = self.transient_key(item);
        let message = match host.transients.get(&key) {
            Ok(message) => message,
            Err(e) => {
                warn!(
                    metabox_id = self.id(),
                    %item,
                    error = %e,
                    "Failed to read save error message"
                );
                None
            }
        };
        if let Err(e) = host.transients.delete(&key) {
            warn!(metabox_id = self.id(), %item, error = %e, "Failed to clear save error message");
        }
        message.filter(|m| !m.is_empty())
    }

    /// Replaces this post type's messages with the pending error, if any.
    ///
    /// The error is placed at `message_index` (default `"0"`). Without a
    /// pending error `messages` is returned unchanged.
    pub fn messages(
        &self,
        host: &Host,
        mut messages: UpdatedMessages,
        item: ItemId,
        message_index: Option<&str>,
    ) -> UpdatedMessages {
        if let Some(error) = self.resolve_display_message(host, item) {
            let index = message_index.unwrap_or(DEFAULT_MESSAGE_INDEX).to_string();
            messages.insert(
                self.config().post_type.clone(),
                BTreeMap::from([(index, error)]),
            );
        }
        messages
    }
}

//! Dispatches host events to the metaboxes attached to them.

use crate::error::{MetaBoxError, MetaBoxResult};
use crate::messages::UpdatedMessages;
use crate::metabox::MetaBox;
use crate::persist::PersistOutcome;
use metabox_host::{Hook, Host, Submission};
use metabox_types::{ActorId, ItemId};
use tracing::info;

/// Owns a set of metaboxes and the host services they run against.
///
/// Each event reaches a metabox only while its handler for that hook is
/// registered.
pub struct MetaBoxRegistry {
    host: Host,
    boxes: Vec<MetaBox>,
}

impl MetaBoxRegistry {
    pub fn new(host: Host) -> Self {
        Self {
            host,
            boxes: Vec::new(),
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    /// Adds a metabox and registers its handlers.
    pub fn add(&mut self, metabox: MetaBox) -> MetaBoxResult<()> {
        if self.get(metabox.id()).is_some() {
            return Err(MetaBoxError::DuplicateMetaBox(metabox.id().to_string()));
        }
        metabox.register(self.host.hooks.as_ref());
        info!(
            metabox_id = metabox.id(),
            post_type = %metabox.config().post_type,
            "Metabox registered"
        );
        self.boxes.push(metabox);
        Ok(())
    }

    /// Removes a metabox and its handlers.
    pub fn remove(&mut self, id: &str) -> Option<MetaBox> {
        let position = self.boxes.iter().position(|m| m.id() == id)?;
        let metabox = self.boxes.remove(position);
        metabox.unregister(self.host.hooks.as_ref());
        Some(metabox)
    }

    pub fn get(&self, id: &str) -> Option<&MetaBox> {
        self.boxes.iter().find(|m| m.id() == id)
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    fn attached(&self, hook: Hook) -> impl Iterator<Item = &MetaBox> {
        self.boxes
            .iter()
            .filter(move |m| self.host.hooks.is_registered(hook, &m.handler_name(hook)))
    }

    /// Places every attached metabox on the edit screen.
    pub fn add_meta_boxes(&self) {
        for metabox in self.attached(Hook::AddMetaBoxes) {
            metabox.add_meta_boxes(self.host.screen.as_ref());
        }
    }

    /// Renders one metabox for `item`.
    pub fn render(&self, id: &str, item: ItemId) -> Option<String> {
        self.get(id).map(|m| m.render(&self.host, item))
    }

    /// Runs the save handler of every attached metabox, in registration order.
    pub fn save(
        &self,
        item: ItemId,
        submission: &Submission,
        actor: ActorId,
    ) -> Vec<(String, PersistOutcome)> {
        self.attached(Hook::SavePost)
            .map(|m| (m.id().to_string(), m.persist(&self.host, item, submission, actor)))
            .collect()
    }

    /// Composes post-save messages through every attached metabox.
    pub fn messages(
        &self,
        messages: UpdatedMessages,
        item: ItemId,
        message_index: Option<&str>,
    ) -> UpdatedMessages {
        self.attached(Hook::PostUpdatedMessages).fold(messages, |messages, m| {
            m.messages(&self.host, messages, item, message_index)
        })
    }
}

use crate::error::HostResult;
use metabox_types::{ActorId, ItemId, ItemStatus};
use std::time::Duration;

/// Key/value attributes scoped to a content item.
pub trait AttributeStore: Send + Sync {
    /// Returns the stored value, `None` when the attribute was never written.
    fn get(&self, item: ItemId, key: &str) -> HostResult<Option<String>>;

    fn set(&self, item: ItemId, key: &str, value: &str) -> HostResult<()>;
}

/// Short-lived values that expire after a fixed time.
pub trait TransientStore: Send + Sync {
    fn set(&self, key: &str, value: &str, ttl: Duration) -> HostResult<()>;

    /// Returns the value unless it is missing or expired.
    fn get(&self, key: &str) -> HostResult<Option<String>>;

    fn delete(&self, key: &str) -> HostResult<()>;
}

/// Decides whether an actor may edit an item.
pub trait Authorizer: Send + Sync {
    fn can_edit(&self, actor: ActorId, item: ItemId) -> bool;
}

/// Changes an item's status and runs the host's item-update operation.
///
/// The update may fire the host's save hooks again.
pub trait ItemUpdater: Send + Sync {
    fn update_status(&self, item: ItemId, status: ItemStatus) -> HostResult<()>;
}

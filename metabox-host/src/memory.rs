//! In-memory host services.
//!
//! Every service keeps its state behind a `Mutex` so a single
//! [`InMemoryHost`] can be shared between a metabox and the test asserting
//! on it.

use crate::editor::TextareaEditor;
use crate::error::{HostError, HostResult};
use crate::escape::HtmlEscaper;
use crate::filter::{DataFilter, PassThrough};
use crate::hooks::{AdminScreen, Hook, HookRegistry};
use crate::host::Host;
use crate::services::{AttributeStore, Authorizer, ItemUpdater, TransientStore};
use metabox_model::MetaBoxConfig;
use metabox_types::{ActorId, ItemId, ItemStatus};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

fn relock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// ================================================================
// Attributes
// ================================================================

/// Attribute store keyed by `(item, key)`.
#[derive(Default)]
pub struct InMemoryAttributes {
    values: Mutex<HashMap<(ItemId, String), String>>,
    failing_keys: Mutex<HashSet<String>>,
}

impl InMemoryAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every write to `key` fail.
    pub fn fail_writes_to(&self, key: &str) {
        relock(&self.failing_keys).insert(key.to_string());
    }

    /// All attributes stored for `item`.
    pub fn snapshot(&self, item: ItemId) -> HashMap<String, String> {
        relock(&self.values)
            .iter()
            .filter(|((id, _), _)| *id == item)
            .map(|((_, key), value)| (key.clone(), value.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        relock(&self.values).len()
    }

    pub fn is_empty(&self) -> bool {
        relock(&self.values).is_empty()
    }
}

impl AttributeStore for InMemoryAttributes {
    fn get(&self, item: ItemId, key: &str) -> HostResult<Option<String>> {
        let values = self
            .values
            .lock()
            .map_err(|e| HostError::Storage(format!("lock poisoned: {e}")))?;
        Ok(values.get(&(item, key.to_string())).cloned())
    }

    fn set(&self, item: ItemId, key: &str, value: &str) -> HostResult<()> {
        if relock(&self.failing_keys).contains(key) {
            return Err(HostError::Storage(format!("write to '{key}' rejected")));
        }
        let mut values = self
            .values
            .lock()
            .map_err(|e| HostError::Storage(format!("lock poisoned: {e}")))?;
        values.insert((item, key.to_string()), value.to_string());
        Ok(())
    }
}

// ================================================================
// Transients
// ================================================================

struct TransientEntry {
    value: String,
    ttl: Duration,
    expires_at: Instant,
}

/// Transient store that honors expiry on read.
#[derive(Default)]
pub struct InMemoryTransients {
    entries: Mutex<HashMap<String, TransientEntry>>,
}

impl InMemoryTransients {
    pub fn new() -> Self {
        Self::default()
    }

    /// The TTL a live entry was stored with.
    pub fn ttl(&self, key: &str) -> Option<Duration> {
        relock(&self.entries)
            .get(key)
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.ttl)
    }

    /// Reads a live entry without consuming it.
    pub fn peek(&self, key: &str) -> Option<String> {
        relock(&self.entries)
            .get(key)
            .filter(|entry| Instant::now() < entry.expires_at)
            .map(|entry| entry.value.clone())
    }

    pub fn is_empty(&self) -> bool {
        relock(&self.entries).is_empty()
    }
}

impl TransientStore for InMemoryTransients {
    fn set(&self, key: &str, value: &str, ttl: Duration) -> HostResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| HostError::Transient(format!("lock poisoned: {e}")))?;
        entries.insert(key.to_string(), TransientEntry {
            value: value.to_string(),
            ttl,
            expires_at: Instant::now() + ttl,
        });
        Ok(())
    }

    fn get(&self, key: &str) -> HostResult<Option<String>> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| HostError::Transient(format!("lock poisoned: {e}")))?;
        match entries.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => Ok(Some(entry.value.clone())),
            Some(_) => {
                entries.remove(key);
                Ok(None)
            }
            None => Ok(None),
        }
    }

    fn delete(&self, key: &str) -> HostResult<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|e| HostError::Transient(format!("lock poisoned: {e}")))?;
        entries.remove(key);
        Ok(())
    }
}

// ================================================================
// Items
// ================================================================

/// Item status table plus a log of every update call.
#[derive(Default)]
pub struct InMemoryItems {
    statuses: Mutex<HashMap<ItemId, ItemStatus>>,
    updates: Mutex<Vec<(ItemId, ItemStatus)>>,
}

impl InMemoryItems {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, item: ItemId, status: ItemStatus) {
        relock(&self.statuses).insert(item, status);
    }

    pub fn status(&self, item: ItemId) -> Option<ItemStatus> {
        relock(&self.statuses).get(&item).copied()
    }

    /// Every `update_status` call, in order.
    pub fn updates(&self) -> Vec<(ItemId, ItemStatus)> {
        relock(&self.updates).clone()
    }
}

impl ItemUpdater for InMemoryItems {
    fn update_status(&self, item: ItemId, status: ItemStatus) -> HostResult<()> {
        relock(&self.statuses).insert(item, status);
        relock(&self.updates).push((item, status));
        Ok(())
    }
}

// ================================================================
// Hooks and screen
// ================================================================

/// Hook registry backed by a set of `(hook, handler)` pairs.
#[derive(Default)]
pub struct InMemoryHooks {
    handlers: Mutex<HashSet<(Hook, String)>>,
}

impl InMemoryHooks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handlers attached to `hook`, sorted by name.
    pub fn handlers(&self, hook: Hook) -> Vec<String> {
        let mut names: Vec<String> = relock(&self.handlers)
            .iter()
            .filter(|(h, _)| *h == hook)
            .map(|(_, name)| name.clone())
            .collect();
        names.sort();
        names
    }
}

impl HookRegistry for InMemoryHooks {
    fn add(&self, hook: Hook, handler: &str) {
        relock(&self.handlers).insert((hook, handler.to_string()));
    }

    fn remove(&self, hook: Hook, handler: &str) {
        relock(&self.handlers).remove(&(hook, handler.to_string()));
    }

    fn is_registered(&self, hook: Hook, handler: &str) -> bool {
        relock(&self.handlers).contains(&(hook, handler.to_string()))
    }
}

/// Edit screen that records the metaboxes placed on it.
#[derive(Default)]
pub struct InMemoryScreen {
    boxes: Mutex<Vec<MetaBoxConfig>>,
}

impl InMemoryScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn meta_boxes(&self) -> Vec<MetaBoxConfig> {
        relock(&self.boxes).clone()
    }
}

impl AdminScreen for InMemoryScreen {
    fn add_meta_box(&self, config: &MetaBoxConfig) {
        relock(&self.boxes).push(config.clone());
    }
}

// ================================================================
// Authorization
// ================================================================

/// Grants edit rights from an explicit allow list.
#[derive(Default)]
pub struct StaticAuthorizer {
    grants: Mutex<HashSet<(ActorId, ItemId)>>,
    editors: Mutex<HashSet<ActorId>>,
}

impl StaticAuthorizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets `actor` edit `item`.
    pub fn grant(&self, actor: ActorId, item: ItemId) {
        relock(&self.grants).insert((actor, item));
    }

    /// Lets `actor` edit every item.
    pub fn grant_all(&self, actor: ActorId) {
        relock(&self.editors).insert(actor);
    }
}

impl Authorizer for StaticAuthorizer {
    fn can_edit(&self, actor: ActorId, item: ItemId) -> bool {
        relock(&self.editors).contains(&actor) || relock(&self.grants).contains(&(actor, item))
    }
}

// ================================================================
// Bundle
// ================================================================

/// Every in-memory service, shared so tests can inspect state.
#[derive(Clone)]
pub struct InMemoryHost {
    pub attributes: Arc<InMemoryAttributes>,
    pub transients: Arc<InMemoryTransients>,
    pub items: Arc<InMemoryItems>,
    pub hooks: Arc<InMemoryHooks>,
    pub screen: Arc<InMemoryScreen>,
    pub authorizer: Arc<StaticAuthorizer>,
    filter: Arc<dyn DataFilter>,
}

impl InMemoryHost {
    pub fn new() -> Self {
        Self {
            attributes: Arc::new(InMemoryAttributes::new()),
            transients: Arc::new(InMemoryTransients::new()),
            items: Arc::new(InMemoryItems::new()),
            hooks: Arc::new(InMemoryHooks::new()),
            screen: Arc::new(InMemoryScreen::new()),
            authorizer: Arc::new(StaticAuthorizer::new()),
            filter: Arc::new(PassThrough),
        }
    }

    /// Replaces the pass-through data filter.
    #[must_use]
    pub fn with_filter(mut self, filter: impl DataFilter + 'static) -> Self {
        self.filter = Arc::new(filter);
        self
    }

    /// Builds the service bundle a metabox runs against.
    pub fn host(&self) -> Host {
        Host {
            attributes: self.attributes.clone(),
            transients: self.transients.clone(),
            escaper: Arc::new(HtmlEscaper),
            filter: Arc::clone(&self.filter),
            authorizer: self.authorizer.clone(),
            items: self.items.clone(),
            editor: Arc::new(TextareaEditor),
            hooks: self.hooks.clone(),
            screen: self.screen.clone(),
        }
    }
}

impl Default for InMemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

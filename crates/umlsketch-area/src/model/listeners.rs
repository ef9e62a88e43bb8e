//! Focus change listeners
//!
//! Other views (attribute editor, tree view) subscribe here to learn which
//! real object is focused in the sketch area.

use umlsketch_core::{EntityRef, UiDataCallback};
use uuid::Uuid;

/// Unique handle for a listener registration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(Uuid);

impl SubscriptionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Registry of focus listeners, called in subscription order
#[derive(Default)]
pub struct FocusListeners {
    entries: Vec<(SubscriptionId, UiDataCallback<EntityRef>)>,
}

impl FocusListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(EntityRef) + 'static,
    {
        let id = SubscriptionId::new();
        self.entries.push((id, Box::new(listener)));
        tracing::debug!("Focus listener {} subscribed", id);
        id
    }

    /// Returns false if `id` was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != id);
        self.entries.len() != before
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn notify(&self, focused: EntityRef) {
        for (_, listener) in &self.entries {
            listener(focused);
        }
    }
}

impl std::fmt::Debug for FocusListeners {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FocusListeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

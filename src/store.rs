//! Serializing dispatch point for the forms tree.
//!
//! Holds the current snapshot and funnels every intent through the
//! reducer one at a time. Readers get `Arc` snapshots that are never
//! mutated after publication.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use crate::config::{Config, FormsConfig};
use crate::forms::{FormIntent, FormsReducer, FormsState};
use crate::mvi::Reducer;

type Listener = Arc<dyn Fn(&FormsState) + Send + Sync>;

/// Handle returned by [`FormStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(usize);

/// Thread-safe owner of the forms tree.
///
/// Clones share the same tree. `dispatch` is the single writer: it runs
/// the reducer under the write lock and publishes the result as a new
/// snapshot.
#[derive(Clone)]
pub struct FormStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    state: RwLock<Arc<FormsState>>,
    listeners: Mutex<Vec<(SubscriptionId, Listener)>>,
    next_subscription: AtomicUsize,
    forms: FormsConfig,
}

impl FormStore {
    pub fn new() -> Self {
        Self::from_state(FormsState::new())
    }

    /// Store whose persistent forms come from `config.forms`.
    pub fn with_config(config: &Config) -> Self {
        Self::build(FormsState::new(), config.forms.clone())
    }

    /// Store seeded with an existing tree (e.g., one restored from disk).
    pub fn from_state(state: FormsState) -> Self {
        Self::build(state, FormsConfig::default())
    }

    fn build(state: FormsState, forms: FormsConfig) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(Arc::new(state)),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicUsize::new(0),
                forms,
            }),
        }
    }

    /// Current snapshot. Cheap; later dispatches never alter it.
    pub fn state(&self) -> Arc<FormsState> {
        Arc::clone(&self.inner.state.read())
    }

    /// Apply `intent` and publish the next tree.
    ///
    /// Returns whether the tree changed. Subscribers are notified, outside
    /// the lock, only when it did.
    pub fn dispatch(&self, intent: FormIntent) -> bool {
        let kind = intent.kind();
        let form = intent.form().map(str::to_owned);

        let next = {
            let mut guard = self.inner.state.write();
            let previous = Arc::clone(&guard);
            let next = FormsReducer::reduce(FormsState::clone(&previous), intent);
            if next == *previous {
                None
            } else {
                let next = Arc::new(next);
                *guard = Arc::clone(&next);
                Some(next)
            }
        };

        let Some(next) = next else {
            tracing::trace!(kind, form = ?form, "Form intent left state unchanged");
            return false;
        };

        tracing::debug!(kind, form = ?form, "Form intent applied");
        self.notify(&next);
        true
    }

    /// Register `listener`, called with every new snapshot.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&FormsState) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.inner.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.inner.listeners.lock().push((id, Arc::new(listener)));
        id
    }

    /// Remove a listener. Returns false if it was not registered.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.inner.listeners.lock();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Whether `form` is configured to survive unmount.
    pub fn is_persistent(&self, form: &str) -> bool {
        self.inner.forms.is_persistent(form)
    }

    fn notify(&self, state: &FormsState) {
        // Snapshot the list so listeners may subscribe or dispatch re-entrantly.
        let listeners: Vec<Listener> = self
            .inner
            .listeners
            .lock()
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            listener(state);
        }
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

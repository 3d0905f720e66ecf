// SPDX-License-Identifier: MPL-2.0
//! Application-wide modal state.
//!
//! The store keeps two maps keyed by [`ModalId`]: the configuration of every
//! modal ever opened (until removed) and the data attached to it. Closing a
//! modal only hides it; removing it deletes both entries.

use super::config::{ModalConfig, ModalDefaults, ModalId, ModalRequest};
use super::data::ModalData;
use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Weak};
use tokio::sync::watch;
use tracing::{debug, trace};

/// Snapshot of every modal and its data.
pub struct ModalState<V> {
    /// Configurations in first-opened order.
    modals: IndexMap<ModalId, ModalConfig>,
    data: HashMap<ModalId, ModalData<V>>,
}

impl<V> Default for ModalState<V> {
    fn default() -> Self {
        Self {
            modals: IndexMap::new(),
            data: HashMap::new(),
        }
    }
}

impl<V> fmt::Debug for ModalState<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalState")
            .field("modals", &self.modals)
            .field("data", &self.data)
            .finish()
    }
}

impl<V> ModalState<V> {
    /// Iterates over every stored configuration, visible or not.
    pub fn modals(&self) -> impl Iterator<Item = &ModalConfig> {
        self.modals.values()
    }

    /// Iterates over the visible configurations.
    pub fn visible(&self) -> impl Iterator<Item = &ModalConfig> {
        self.modals.values().filter(|modal| modal.visible)
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ModalConfig> {
        self.modals.get(id)
    }

    #[must_use]
    pub fn data(&self, id: &str) -> Option<&ModalData<V>> {
        self.data.get(id)
    }
}

struct Shared<V> {
    state: watch::Sender<ModalState<V>>,
    defaults: ModalDefaults,
}

/// Handle to the application's modal state.
///
/// Cloning is cheap; all clones share one state. `V` is the renderable type
/// of the presentation layer stored in [`ModalData`].
pub struct ModalStore<V = ()> {
    shared: Arc<Shared<V>>,
}

impl<V> Clone for ModalStore<V> {
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<V> fmt::Debug for ModalStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalStore")
            .field("state", &*self.shared.state.borrow())
            .field("defaults", &self.shared.defaults)
            .finish()
    }
}

impl<V> Default for ModalStore<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Non-owning handle to a [`ModalStore`], held by callbacks stored inside it.
pub struct WeakModalStore<V> {
    shared: Weak<Shared<V>>,
}

impl<V> Clone for WeakModalStore<V> {
    fn clone(&self) -> Self {
        Self {
            shared: Weak::clone(&self.shared),
        }
    }
}

impl<V> WeakModalStore<V> {
    /// Returns the store if it is still alive.
    #[must_use]
    pub fn upgrade(&self) -> Option<ModalStore<V>> {
        self.shared.upgrade().map(|shared| ModalStore { shared })
    }
}

impl<V> ModalStore<V> {
    /// Creates an empty store with the default placement.
    #[must_use]
    pub fn new() -> Self {
        Self::with_defaults(ModalDefaults::default())
    }

    /// Creates an empty store using `defaults` for unset placement fields.
    #[must_use]
    pub fn with_defaults(defaults: ModalDefaults) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: watch::Sender::new(ModalState::default()),
                defaults,
            }),
        }
    }

    #[must_use]
    pub fn defaults(&self) -> &ModalDefaults {
        &self.shared.defaults
    }

    #[must_use]
    pub fn downgrade(&self) -> WeakModalStore<V> {
        WeakModalStore {
            shared: Arc::downgrade(&self.shared),
        }
    }

    /// Generates a fresh modal ID.
    #[must_use]
    pub fn generate_id(&self) -> ModalId {
        ModalId::generate()
    }

    /// Opens a modal and returns its ID.
    ///
    /// Uses the request's ID when given, a generated one otherwise. An
    /// existing entry with the same ID is replaced wholesale, and so is its
    /// data when `data` is provided.
    pub fn open(&self, request: ModalRequest, data: Option<ModalData<V>>) -> ModalId {
        let id = request.id.clone().unwrap_or_else(|| self.generate_id());
        let config = request.into_config(id.clone(), &self.shared.defaults);

        debug!(id = %id, title = %config.title, position = ?config.position, "modal opened");
        self.shared.state.send_modify(|state| {
            state.modals.insert(id.clone(), config);
            if let Some(data) = data {
                state.data.insert(id.clone(), data);
            }
        });
        id
    }

    /// Opens a modal under a freshly generated ID, ignoring any ID in the request.
    pub fn open_with_generated_id(
        &self,
        request: ModalRequest,
        data: Option<ModalData<V>>,
    ) -> ModalId {
        self.open(ModalRequest { id: None, ..request }, data)
    }

    /// Shallow-merges `data` into the entry for `id`, creating it if needed.
    pub fn set_data(&self, id: &str, data: ModalData<V>) {
        self.shared.state.send_modify(|state| {
            match state.data.get_mut(id) {
                Some(existing) => existing.merge(data),
                None => {
                    state.data.insert(ModalId::from(id), data);
                }
            }
        });
    }

    /// Hides the modal. The entry stays until [`remove`](Self::remove).
    pub fn close(&self, id: &str) {
        let hidden = self.shared.state.send_if_modified(|state| {
            match state.modals.get_mut(id) {
                Some(modal) if modal.visible => {
                    modal.visible = false;
                    true
                }
                _ => false,
            }
        });
        if hidden {
            debug!(id, "modal closed");
        } else {
            trace!(id, "close ignored, modal unknown or hidden");
        }
    }

    /// Hides every modal and returns how many were visible.
    pub fn close_all(&self) -> usize {
        let mut hidden = 0;
        self.shared.state.send_if_modified(|state| {
            for modal in state.modals.values_mut().filter(|modal| modal.visible) {
                modal.visible = false;
                hidden += 1;
            }
            hidden > 0
        });
        if hidden > 0 {
            debug!(hidden, "all modals closed");
        } else {
            trace!("close_all ignored, no visible modal");
        }
        hidden
    }

    /// Deletes the configuration and data of `id`.
    pub fn remove(&self, id: &str) {
        let removed = self.shared.state.send_if_modified(|state| {
            let config = state.modals.shift_remove(id).is_some();
            let data = state.data.remove(id).is_some();
            config || data
        });
        if removed {
            debug!(id, "modal removed");
        }
    }

    /// Returns whether the modal exists and is visible.
    #[must_use]
    pub fn is_modal_visible(&self, id: &str) -> bool {
        self.shared
            .state
            .borrow()
            .get(id)
            .is_some_and(|modal| modal.visible)
    }

    /// Runs the `on_action` callback stored for `id`.
    ///
    /// The callback runs after the state borrow is released, so it may call
    /// back into the store. Returns `false` if no callback is stored.
    pub fn dispatch_action(&self, id: &str, action: &str, payload: &Value) -> bool {
        let handler = self
            .shared
            .state
            .borrow()
            .data(id)
            .and_then(ModalData::action_handler)
            .cloned();

        match handler {
            Some(handler) => {
                trace!(id, action, "dispatching modal action");
                handler(action, payload);
                true
            }
            None => false,
        }
    }

    /// Subscribes to every change of the modal state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ModalState<V>> {
        self.shared.state.subscribe()
    }
}

impl<V: Clone> ModalStore<V> {
    /// Returns the visible modals in first-opened order.
    #[must_use]
    pub fn visible_modals(&self) -> Vec<ModalConfig> {
        self.shared.state.borrow().visible().cloned().collect()
    }

    #[must_use]
    pub fn get_modal(&self, id: &str) -> Option<ModalConfig> {
        self.shared.state.borrow().get(id).cloned()
    }

    #[must_use]
    pub fn get_modal_data(&self, id: &str) -> Option<ModalData<V>> {
        self.shared.state.borrow().data(id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::modal::ModalPosition;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn store() -> ModalStore {
        ModalStore::new()
    }

    #[test]
    fn open_without_id_generates_one() {
        let store = store();
        let id = store.open(
            ModalRequest::new("Pick size").position(ModalPosition::Left),
            None,
        );

        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert!(store.is_modal_visible(&id));

        store.close(&id);
        assert!(!store.is_modal_visible(&id));
        let config = store.get_modal(&id).expect("config kept after close");
        assert!(!config.visible);
        assert_eq!(config.title, "Pick size");
        assert_eq!(config.position, ModalPosition::Left);
    }

    #[test]
    fn open_with_explicit_id_overwrites_config() {
        let store = store();
        store.open(
            ModalRequest::new("First").id("basket").position(ModalPosition::Top),
            None,
        );
        store.close("basket");
        let id = store.open(ModalRequest::new("Second").id("basket"), None);

        assert_eq!(id.as_str(), "basket");
        let config = store.get_modal("basket").unwrap();
        assert_eq!(config.title, "Second");
        assert_eq!(config.position, ModalPosition::Right);
        assert!(config.visible);
    }

    #[test]
    fn open_replaces_data_but_set_data_merges() {
        let store = store();
        store.open(
            ModalRequest::new("A").id("m"),
            Some(ModalData::new().with_title("one").with_modal_type("size")),
        );
        store.open(
            ModalRequest::new("A").id("m"),
            Some(ModalData::new().with_title("two")),
        );
        let data = store.get_modal_data("m").unwrap();
        assert_eq!(data.title(), Some("two"));
        assert_eq!(data.modal_type(), None);

        store.set_data("m", ModalData::new().with_modal_type("colour"));
        let data = store.get_modal_data("m").unwrap();
        assert_eq!(data.title(), Some("two"));
        assert_eq!(data.modal_type(), Some("colour"));
    }

    #[test]
    fn open_without_data_keeps_existing_data() {
        let store = store();
        store.open(
            ModalRequest::new("A").id("m"),
            Some(ModalData::new().with_title("kept")),
        );
        store.open(ModalRequest::new("B").id("m"), None);
        assert_eq!(store.get_modal_data("m").unwrap().title(), Some("kept"));
    }

    #[test]
    fn open_with_generated_id_ignores_request_id() {
        let store = store();
        let id = store.open_with_generated_id(ModalRequest::new("X").id("fixed"), None);
        assert_ne!(id.as_str(), "fixed");
        assert!(store.get_modal("fixed").is_none());
    }

    #[test]
    fn set_data_creates_missing_entry() {
        let store = store();
        store.set_data("orphan", ModalData::new().with_field("count", 3));
        assert_eq!(
            store.get_modal_data("orphan").unwrap().field("count"),
            Some(&json!(3))
        );
        assert!(store.get_modal("orphan").is_none());
    }

    #[test]
    fn close_is_idempotent_and_ignores_unknown_ids() {
        let store = store();
        let id = store.open(ModalRequest::new("M"), None);
        store.close(&id);
        store.close(&id);
        store.close("missing");
        assert!(!store.is_modal_visible(&id));
        assert!(store.get_modal("missing").is_none());
    }

    #[test]
    fn close_all_hides_everything() {
        let store = store();
        assert_eq!(store.close_all(), 0);
        assert!(store.visible_modals().is_empty());

        let a = store.open(ModalRequest::new("A"), None);
        let b = store.open(ModalRequest::new("B"), None);
        let c = store.open(ModalRequest::new("C"), None);
        store.close(&c);
        assert_eq!(store.visible_modals().len(), 2);

        assert_eq!(store.close_all(), 2);
        assert_eq!(store.close_all(), 0);
        assert!(store.visible_modals().is_empty());
        assert!(store.get_modal(&a).is_some());
        assert!(store.get_modal(&b).is_some());
    }

    #[test]
    fn visible_modals_keep_open_order() {
        let store = store();
        store.open(ModalRequest::new("first").id("1"), None);
        store.open(ModalRequest::new("second").id("2"), None);
        store.open(ModalRequest::new("third").id("3"), None);
        store.close("2");

        let titles: Vec<String> = store.visible_modals().into_iter().map(|m| m.title).collect();
        assert_eq!(titles, vec!["first", "third"]);
    }

    #[test]
    fn remove_deletes_config_and_data() {
        let store = store();
        let id = store.open(
            ModalRequest::new("Gone"),
            Some(ModalData::new().with_title("payload")),
        );
        store.remove(&id);
        store.remove(&id);

        assert!(store.get_modal(&id).is_none());
        assert!(store.get_modal_data(&id).is_none());
        assert!(!store.is_modal_visible(&id));
    }

    #[test]
    fn dispatch_action_runs_stored_handler() {
        let store = store();
        let hits = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&hits);
        let id = store.open(
            ModalRequest::new("Handles"),
            Some(ModalData::new().on_action(move |action, payload| {
                assert_eq!(action, "select");
                assert_eq!(payload, &json!({"uid": "handle-1"}));
                counter.fetch_add(1, Ordering::SeqCst);
            })),
        );

        assert!(store.dispatch_action(&id, "select", &json!({"uid": "handle-1"})));
        assert!(!store.dispatch_action("missing", "select", &Value::Null));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn handler_may_reenter_store() {
        let store = store();
        let weak = store.downgrade();
        let id = store.generate_id();
        let target = id.clone();
        store.open(
            ModalRequest::new("Self closing").id(id.clone()),
            Some(ModalData::new().on_action(move |_, _| {
                if let Some(store) = weak.upgrade() {
                    store.close(&target);
                }
            })),
        );

        store.dispatch_action(&id, "anything", &Value::Null);
        assert!(!store.is_modal_visible(&id));
    }

    #[tokio::test]
    async fn subscribers_are_notified() {
        let store = store();
        let mut rx = store.subscribe();

        let id = store.open(ModalRequest::new("Watch me"), None);
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().get(&id).is_some_and(|m| m.visible));

        store.close("missing");
        assert!(!rx.has_changed().unwrap());
    }
}

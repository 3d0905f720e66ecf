// SPDX-License-Identifier: MPL-2.0
//! High-level entry points for opening modals from view code.
//!
//! The launcher always generates the modal ID, stores the renderable and its
//! props, and wraps the caller's action handler so that the `"close"` action
//! hides the modal on its own.

use super::config::{ModalId, ModalPosition, ModalRequest};
use super::data::{ActionHandler, ModalContent, ModalData};
use super::store::{ModalStore, WeakModalStore};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Action token that closes the modal it is dispatched to.
pub const CLOSE_ACTION: &str = "close";

/// Callback run after a modal was closed through [`CLOSE_ACTION`].
pub type CloseHandler = Arc<dyn Fn() + Send + Sync>;

/// Options for [`ModalLauncher::open_modal`].
#[derive(Clone, Default)]
pub struct OpenModalOptions {
    pub title: String,
    pub position: Option<ModalPosition>,
    pub size: Option<String>,
    /// Props passed to a component. Ignored for pre-built nodes.
    pub props: Map<String, Value>,
    pub on_action: Option<ActionHandler>,
    pub on_close: Option<CloseHandler>,
}

impl fmt::Debug for OpenModalOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenModalOptions")
            .field("title", &self.title)
            .field("position", &self.position)
            .field("size", &self.size)
            .field("props", &self.props)
            .field("on_action", &self.on_action.is_some())
            .field("on_close", &self.on_close.is_some())
            .finish()
    }
}

impl OpenModalOptions {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn position(mut self, position: ModalPosition) -> Self {
        self.position = Some(position);
        self
    }

    #[must_use]
    pub fn size(mut self, size: impl Into<String>) -> Self {
        self.size = Some(size.into());
        self
    }

    #[must_use]
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn on_action<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &Value) + Send + Sync + 'static,
    {
        self.on_action = Some(Arc::new(handler));
        self
    }

    #[must_use]
    pub fn on_close<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_close = Some(Arc::new(handler));
        self
    }
}

/// Opens and closes modals on top of a shared [`ModalStore`].
pub struct ModalLauncher<V = ()> {
    store: ModalStore<V>,
}

impl<V> Clone for ModalLauncher<V> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<V> fmt::Debug for ModalLauncher<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalLauncher")
            .field("store", &self.store)
            .finish()
    }
}

impl<V> ModalLauncher<V>
where
    V: Send + Sync + 'static,
{
    #[must_use]
    pub fn new(store: ModalStore<V>) -> Self {
        Self { store }
    }

    #[must_use]
    pub fn store(&self) -> &ModalStore<V> {
        &self.store
    }

    /// Opens a component (direct or deferred) in a new modal.
    pub fn open_modal(&self, content: ModalContent<V>, options: OpenModalOptions) -> ModalId {
        let OpenModalOptions {
            title,
            position,
            size,
            props,
            on_action,
            on_close,
        } = options;

        let id = self.store.generate_id();
        let data = ModalData::new()
            .with_content(content)
            .with_props(props)
            .with_action_handler(intercept_close(
                self.store.downgrade(),
                id.clone(),
                on_action,
                on_close,
            ));

        self.store
            .open(Self::request(&id, title, position, size), Some(data))
    }

    /// Opens a modal around a render tree built by `create_node`.
    ///
    /// The tree is built immediately; `options.props` is not used since the
    /// node already carries its own.
    pub fn open_modal_with_node<F>(&self, create_node: F, options: OpenModalOptions) -> ModalId
    where
        F: FnOnce() -> V,
    {
        let OpenModalOptions {
            title,
            position,
            size,
            on_action,
            on_close,
            ..
        } = options;

        let id = self.store.generate_id();
        let data = ModalData::new()
            .with_content(ModalContent::Node(create_node()))
            .with_action_handler(intercept_close(
                self.store.downgrade(),
                id.clone(),
                on_action,
                on_close,
            ));

        self.store
            .open(Self::request(&id, title, position, size), Some(data))
    }

    /// Hides a modal.
    pub fn close_modal(&self, id: &str) {
        self.store.close(id);
    }

    /// Hides every modal.
    pub fn close_all_modals(&self) {
        self.store.close_all();
    }

    fn request(
        id: &ModalId,
        title: String,
        position: Option<ModalPosition>,
        size: Option<String>,
    ) -> ModalRequest {
        ModalRequest {
            id: Some(id.clone()),
            title,
            position,
            size,
        }
    }
}

/// Wraps `on_action` so that [`CLOSE_ACTION`] closes modal `id` and runs
/// `on_close` first. Every action, `"close"` included, is then forwarded.
fn intercept_close<V: Send + Sync + 'static>(
    store: WeakModalStore<V>,
    id: ModalId,
    on_action: Option<ActionHandler>,
    on_close: Option<CloseHandler>,
) -> ActionHandler {
    Arc::new(move |action: &str, payload: &Value| {
        if action == CLOSE_ACTION {
            if let Some(store) = store.upgrade() {
                store.close(&id);
            } else {
                trace!(id = %id, "modal store dropped before close action");
            }
            if let Some(on_close) = &on_close {
                on_close();
            }
        }
        if let Some(on_action) = &on_action {
            on_action(action, payload);
        }
    })
}

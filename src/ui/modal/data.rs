// SPDX-License-Identifier: MPL-2.0
//! Payload attached to a modal.
//!
//! A modal's data is a bag of keyed JSON fields plus two typed slots the
//! presentation layer cannot express as JSON: the renderable content and the
//! action callback. `V` is whatever the view layer renders (a component
//! handle, a widget tree, ...).

use futures_util::future::BoxFuture;
use futures_util::FutureExt;
use serde_json::{Map, Value};
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Callback invoked with an action token and its payload.
pub type ActionHandler = Arc<dyn Fn(&str, &Value) + Send + Sync>;

/// Lazily resolves a renderable, e.g. a component loaded on first display.
pub type Loader<V> = Arc<dyn Fn() -> BoxFuture<'static, V> + Send + Sync>;

/// Well-known field names.
pub mod keys {
    pub const TITLE: &str = "title";
    pub const OPTIONS: &str = "options";
    pub const SELECTED_OPTION: &str = "selectedOption";
    pub const MODAL_TYPE: &str = "modalType";
    pub const CONTEXT_DATA: &str = "contextData";
    pub const PROPS: &str = "props";
}

/// What a modal renders.
pub enum ModalContent<V> {
    /// A component reference, rendered with the modal's `props`.
    Component(V),
    /// A component that is resolved asynchronously when first needed.
    Deferred(Loader<V>),
    /// A render tree built ahead of time.
    Node(V),
}

impl<V> ModalContent<V> {
    /// Wraps an async component factory.
    pub fn deferred<F, Fut>(load: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = V> + Send + 'static,
    {
        Self::Deferred(Arc::new(move || load().boxed()))
    }

    #[must_use]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Self::Deferred(_))
    }
}

impl<V: Clone> ModalContent<V> {
    /// Produces the renderable, running the loader for deferred content.
    pub async fn resolve(&self) -> V {
        match self {
            Self::Component(view) | Self::Node(view) => view.clone(),
            Self::Deferred(load) => load().await,
        }
    }
}

impl<V: Clone> Clone for ModalContent<V> {
    fn clone(&self) -> Self {
        match self {
            Self::Component(view) => Self::Component(view.clone()),
            Self::Deferred(load) => Self::Deferred(Arc::clone(load)),
            Self::Node(view) => Self::Node(view.clone()),
        }
    }
}

impl<V> fmt::Debug for ModalContent<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Component(_) => f.write_str("Component(..)"),
            Self::Deferred(_) => f.write_str("Deferred(..)"),
            Self::Node(_) => f.write_str("Node(..)"),
        }
    }
}

/// Data stored next to a modal's configuration.
pub struct ModalData<V = ()> {
    fields: Map<String, Value>,
    content: Option<ModalContent<V>>,
    on_action: Option<ActionHandler>,
}

impl<V> Default for ModalData<V> {
    fn default() -> Self {
        Self {
            fields: Map::new(),
            content: None,
            on_action: None,
        }
    }
}

impl<V: Clone> Clone for ModalData<V> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
            content: self.content.clone(),
            on_action: self.on_action.clone(),
        }
    }
}

impl<V> fmt::Debug for ModalData<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModalData")
            .field("fields", &self.fields)
            .field("content", &self.content)
            .field("on_action", &self.on_action.as_ref().map(|_| ".."))
            .finish()
    }
}

impl<V> ModalData<V> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an arbitrary field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        self.with_field(keys::TITLE, title.into())
    }

    #[must_use]
    pub fn with_options(self, options: Vec<Value>) -> Self {
        self.with_field(keys::OPTIONS, options)
    }

    #[must_use]
    pub fn with_selected_option(self, option: impl Into<Value>) -> Self {
        self.with_field(keys::SELECTED_OPTION, option)
    }

    #[must_use]
    pub fn with_modal_type(self, modal_type: impl Into<String>) -> Self {
        self.with_field(keys::MODAL_TYPE, modal_type.into())
    }

    #[must_use]
    pub fn with_context_data(self, context: impl Into<Value>) -> Self {
        self.with_field(keys::CONTEXT_DATA, context)
    }

    #[must_use]
    pub fn with_props(self, props: Map<String, Value>) -> Self {
        self.with_field(keys::PROPS, Value::Object(props))
    }

    #[must_use]
    pub fn with_content(mut self, content: ModalContent<V>) -> Self {
        self.content = Some(content);
        self
    }

    /// Sets the callback run by [`ModalStore::dispatch_action`](super::ModalStore::dispatch_action).
    #[must_use]
    pub fn on_action<F>(mut self, handler: F) -> Self
    where
        F: Fn(&str, &Value) + Send + Sync + 'static,
    {
        self.on_action = Some(Arc::new(handler));
        self
    }

    #[must_use]
    pub fn with_action_handler(mut self, handler: ActionHandler) -> Self {
        self.on_action = Some(handler);
        self
    }

    #[must_use]
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.field(keys::TITLE).and_then(Value::as_str)
    }

    #[must_use]
    pub fn options(&self) -> &[Value] {
        self.field(keys::OPTIONS)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[must_use]
    pub fn selected_option(&self) -> Option<&Value> {
        self.field(keys::SELECTED_OPTION)
    }

    #[must_use]
    pub fn modal_type(&self) -> Option<&str> {
        self.field(keys::MODAL_TYPE).and_then(Value::as_str)
    }

    #[must_use]
    pub fn context_data(&self) -> Option<&Value> {
        self.field(keys::CONTEXT_DATA)
    }

    #[must_use]
    pub fn props(&self) -> Option<&Map<String, Value>> {
        self.field(keys::PROPS).and_then(Value::as_object)
    }

    #[must_use]
    pub fn content(&self) -> Option<&ModalContent<V>> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn action_handler(&self) -> Option<&ActionHandler> {
        self.on_action.as_ref()
    }

    /// Shallow merge: every field, content or handler present in `other`
    /// replaces the one held here; everything else is kept.
    pub fn merge(&mut self, other: ModalData<V>) {
        self.fields.extend(other.fields);
        if other.content.is_some() {
            self.content = other.content;
        }
        if other.on_action.is_some() {
            self.on_action = other.on_action;
        }
    }
}

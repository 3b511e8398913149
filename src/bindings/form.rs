//! Headless form binding: mount, unmount and the submit flow.

use std::collections::BTreeMap;
use std::future::Future;

use crate::bindings::array::FieldArrayBinding;
use crate::bindings::error::BindingError;
use crate::bindings::field::{FieldBinding, FieldOptions};
use crate::forms::{selectors, FormIntent, Value};
use crate::store::FormStore;

/// Mount options for a form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormOptions {
    /// Keep the form in the tree after unmount.
    pub persistent: bool,
}

/// Result of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome<T> {
    /// A field carried an error; the handler was not called.
    Invalid,
    /// The handler ran and returned this value.
    Submitted(T),
}

impl<T> SubmitOutcome<T> {
    pub fn is_submitted(&self) -> bool {
        matches!(self, Self::Submitted(_))
    }
}

/// Handle to one mounted form.
#[derive(Clone)]
pub struct FormBinding {
    store: FormStore,
    name: String,
    persistent: bool,
}

impl FormBinding {
    /// Mount `name`, adding it to the tree unless it is already there
    /// (a persistent form keeps its state across remounts).
    pub fn mount(store: &FormStore, name: impl Into<String>, options: FormOptions) -> Self {
        let name = name.into();
        if !store.state().contains_form(&name) {
            store.dispatch(FormIntent::AddForm { name: name.clone() });
        }
        let persistent = options.persistent || store.is_persistent(&name);
        tracing::info!(form = %name, persistent, "Form mounted");
        Self {
            store: store.clone(),
            name,
            persistent,
        }
    }

    /// Handle to a form someone else mounted.
    ///
    /// # Errors
    /// Returns `FormNotMounted` if the form is not in the tree.
    pub fn attach(store: &FormStore, name: &str) -> Result<Self, BindingError> {
        if !store.state().contains_form(name) {
            return Err(BindingError::FormNotMounted {
                form: name.to_string(),
            });
        }
        Ok(Self {
            store: store.clone(),
            name: name.to_string(),
            persistent: store.is_persistent(name),
        })
    }

    /// Drop the form from the tree, unless it is persistent.
    pub fn unmount(self) {
        if self.persistent {
            tracing::info!(form = %self.name, "Persistent form kept after unmount");
            return;
        }
        self.store.dispatch(FormIntent::RemoveForm {
            name: self.name.clone(),
        });
        tracing::info!(form = %self.name, "Form unmounted");
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn store(&self) -> &FormStore {
        &self.store
    }

    pub fn is_persistent(&self) -> bool {
        self.persistent
    }

    /// Mount a top-level field.
    pub fn field(&self, name: &str, options: FieldOptions) -> FieldBinding {
        FieldBinding::mount(&self.store, &self.name, name.to_string(), options)
    }

    /// Mount a top-level field array.
    pub fn array(&self, name: &str) -> FieldArrayBinding {
        FieldArrayBinding::mount(&self.store, &self.name, name.to_string())
    }

    pub fn is_valid(&self) -> bool {
        selectors::is_valid(&self.name, &self.store.state())
    }

    pub fn values(&self) -> BTreeMap<String, Value> {
        selectors::collect_values(&self.name, &self.store.state())
    }

    pub fn is_submitting(&self) -> bool {
        selectors::is_submitting(&self.name, &self.store.state())
    }

    /// Touch every field, then hand the values to `on_submit` if the form
    /// is valid.
    pub fn submit<F, T>(&self, on_submit: F) -> SubmitOutcome<T>
    where
        F: FnOnce(BTreeMap<String, Value>) -> T,
    {
        match self.prepare_submit() {
            Some(values) => SubmitOutcome::Submitted(on_submit(values)),
            None => SubmitOutcome::Invalid,
        }
    }

    /// Like [`submit`](Self::submit), but keeps the form flagged as
    /// submitting while the returned future runs. The flag is cleared even
    /// if this future is dropped before the handler finishes.
    pub async fn submit_async<F, Fut>(&self, on_submit: F) -> SubmitOutcome<Fut::Output>
    where
        F: FnOnce(BTreeMap<String, Value>) -> Fut,
        Fut: Future,
    {
        let Some(values) = self.prepare_submit() else {
            return SubmitOutcome::Invalid;
        };

        self.store.dispatch(FormIntent::SubmitStart {
            form: self.name.clone(),
        });
        let _stop = scopeguard::guard(self.name.clone(), |form| {
            self.store.dispatch(FormIntent::SubmitStop { form });
        });

        SubmitOutcome::Submitted(on_submit(values).await)
    }

    fn prepare_submit(&self) -> Option<BTreeMap<String, Value>> {
        self.store.dispatch(FormIntent::TouchAll {
            form: self.name.clone(),
        });
        let state = self.store.state();
        if !selectors::is_valid(&self.name, &state) {
            tracing::debug!(form = %self.name, "Submit rejected: form has errors");
            return None;
        }
        Some(selectors::collect_values(&self.name, &state))
    }
}

//! Headless field-array binding.

use crate::bindings::field::{FieldBinding, FieldOptions};
use crate::forms::{field_key, selectors, FormIntent};
use crate::store::FormStore;

/// Handle to one mounted field array.
#[derive(Clone)]
pub struct FieldArrayBinding {
    store: FormStore,
    form: String,
    id: String,
}

impl FieldArrayBinding {
    /// Mount array `id` of `form`. An existing array keeps its length.
    pub(crate) fn mount(store: &FormStore, form: &str, id: String) -> Self {
        if selectors::array_len(form, &id, &store.state()).is_none() {
            store.dispatch(FormIntent::AddArray {
                form: form.to_string(),
                id: id.clone(),
            });
        }
        Self {
            store: store.clone(),
            form: form.to_string(),
            id,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn len(&self) -> usize {
        selectors::array_len(&self.form, &self.id, &self.store.state()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Field keys to render, `id.0` through `id.(len - 1)`.
    pub fn keys(&self) -> Vec<String> {
        selectors::array_keys(&self.form, &self.id, &self.store.state())
    }

    /// Scope for the item at `index`.
    pub fn item(&self, index: usize) -> ArrayItem {
        ArrayItem {
            store: self.store.clone(),
            form: self.form.clone(),
            key: field_key(&self.id, index),
        }
    }

    pub fn push(&self) {
        self.store.dispatch(FormIntent::ArrayPush {
            form: self.form.clone(),
            id: self.id.clone(),
        });
    }

    /// Drop the last slot. Returns false (and dispatches nothing) when empty.
    pub fn pop(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.store.dispatch(FormIntent::ArrayPop {
            form: self.form.clone(),
            id: self.id.clone(),
        });
        true
    }

    pub fn unshift(&self) {
        self.store.dispatch(FormIntent::ArrayUnshift {
            form: self.form.clone(),
            id: self.id.clone(),
        });
    }

    /// Drop the first slot. Returns false (and dispatches nothing) when empty.
    pub fn shift(&self) -> bool {
        if self.is_empty() {
            return false;
        }
        self.store.dispatch(FormIntent::ArrayShift {
            form: self.form.clone(),
            id: self.id.clone(),
        });
        true
    }

    /// Open a slot right after `index`.
    pub fn insert(&self, index: usize) {
        self.store.dispatch(FormIntent::ArrayInsert {
            form: self.form.clone(),
            id: self.id.clone(),
            index,
        });
    }

    pub fn remove(&self, index: usize) {
        self.store.dispatch(FormIntent::ArrayRemove {
            form: self.form.clone(),
            id: self.id.clone(),
            index,
        });
    }

    pub fn swap(&self, index1: usize, index2: usize) {
        self.store.dispatch(FormIntent::ArraySwap {
            form: self.form.clone(),
            id: self.id.clone(),
            index1,
            index2,
        });
    }

    pub fn move_item(&self, from: usize, to: usize) {
        self.store.dispatch(FormIntent::ArrayMove {
            form: self.form.clone(),
            id: self.id.clone(),
            from,
            to,
        });
    }

    pub fn unmount(self) {
        self.store.dispatch(FormIntent::RemoveArray {
            form: self.form,
            id: self.id,
        });
    }
}

/// One slot of a field array, keyed `id.index`.
///
/// Fields and arrays mounted through it are nested under the slot key and
/// move with the slot when the array is reordered.
#[derive(Clone)]
pub struct ArrayItem {
    store: FormStore,
    form: String,
    key: String,
}

impl ArrayItem {
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Mount a field at the slot key itself (arrays of plain values).
    pub fn entry(&self, options: FieldOptions) -> FieldBinding {
        FieldBinding::mount(&self.store, &self.form, self.key.clone(), options)
    }

    /// Mount field `name` inside the slot, keyed `id.index.name`.
    pub fn field(&self, name: &str, options: FieldOptions) -> FieldBinding {
        FieldBinding::mount(&self.store, &self.form, self.nested(name), options)
    }

    /// Mount array `name` inside the slot, keyed `id.index.name`.
    pub fn array(&self, name: &str) -> FieldArrayBinding {
        FieldArrayBinding::mount(&self.store, &self.form, self.nested(name))
    }

    fn nested(&self, name: &str) -> String {
        format!("{}.{}", self.key, name)
    }
}

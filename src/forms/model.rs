//! Data model for the form state tree.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::mvi::StateTree;

/// Externally supplied field value. The tree never inspects it.
pub type Value = serde_json::Value;

/// Fields of one form, keyed by field id.
pub type FieldMap = BTreeMap<String, Arc<Field>>;

/// Logical lengths of the dynamic field arrays of one form, keyed by array id.
pub type ArrayMap = BTreeMap<String, usize>;

/// One input's value plus its UI and validation metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub value: Value,
    /// Validation error produced outside the tree; `None` means valid.
    pub error: Option<Value>,
    pub dirty: bool,
    pub touched: bool,
    pub visited: bool,
    pub active: bool,
}

impl Field {
    /// Canonical field used by every mount: empty string value, no error,
    /// all flags cleared.
    pub fn fresh() -> Self {
        Self {
            value: Value::String(String::new()),
            error: None,
            dirty: false,
            touched: false,
            visited: false,
            active: false,
        }
    }

    /// Fresh field holding `value`.
    pub fn with_value(value: Value) -> Self {
        Self {
            value,
            ..Self::fresh()
        }
    }
}

impl Default for Field {
    fn default() -> Self {
        Self::fresh()
    }
}

/// A named collection of fields, array lengths and the submitting flag.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Form {
    pub fields: Arc<FieldMap>,
    pub arrays: Arc<ArrayMap>,
    pub submitting: bool,
}

impl Form {
    /// Empty form: no fields, no arrays, not submitting.
    pub fn fresh() -> Self {
        Self::default()
    }

    pub fn field(&self, id: &str) -> Option<&Field> {
        self.fields.get(id).map(Arc::as_ref)
    }

    pub fn array_len(&self, id: &str) -> Option<usize> {
        self.arrays.get(id).copied()
    }

    /// Copy-on-write access to the field map.
    pub(crate) fn fields_mut(&mut self) -> &mut FieldMap {
        Arc::make_mut(&mut self.fields)
    }

    /// Copy-on-write access to the array lengths.
    pub(crate) fn arrays_mut(&mut self) -> &mut ArrayMap {
        Arc::make_mut(&mut self.arrays)
    }

    /// Copy-on-write access to a field, mounting a fresh one if absent.
    pub(crate) fn field_entry(&mut self, id: &str) -> &mut Field {
        let slot = self
            .fields_mut()
            .entry(id.to_owned())
            .or_insert_with(|| Arc::new(Field::fresh()));
        Arc::make_mut(slot)
    }
}

/// Root of the tree: every active form by name.
///
/// Forms are either fully initialized or absent. Every node below the root
/// sits behind an `Arc`; transitions copy only the nodes on the mutated
/// path, so snapshots handed out earlier are never modified and untouched
/// siblings stay shared between the old and the new tree.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormsState {
    forms: BTreeMap<String, Arc<Form>>,
}

impl StateTree for FormsState {}

impl FormsState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self, name: &str) -> Option<&Form> {
        self.forms.get(name).map(Arc::as_ref)
    }

    /// Shared handle to a form node, for pointer comparisons between snapshots.
    pub fn form_arc(&self, name: &str) -> Option<&Arc<Form>> {
        self.forms.get(name)
    }

    pub fn contains_form(&self, name: &str) -> bool {
        self.forms.contains_key(name)
    }

    pub fn form_names(&self) -> impl Iterator<Item = &str> {
        self.forms.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.forms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    pub(crate) fn insert_form(&mut self, name: String, form: Form) {
        self.forms.insert(name, Arc::new(form));
    }

    pub(crate) fn remove_form(&mut self, name: &str) -> bool {
        self.forms.remove(name).is_some()
    }

    /// Run `edit` on a copy of an existing form and publish the copy only if
    /// it differs. A missing form is left absent; an edit that changes
    /// nothing keeps the original node shared.
    pub(crate) fn update_form(&mut self, name: &str, edit: impl FnOnce(&mut Form)) {
        let Some(current) = self.forms.get(name) else {
            return;
        };
        let mut next = Form::clone(current);
        edit(&mut next);
        if next != **current {
            self.forms.insert(name.to_owned(), Arc::new(next));
        }
    }

    /// Copy-on-write access to a form, creating a fresh one if absent.
    pub(crate) fn form_entry(&mut self, name: &str) -> &mut Form {
        let slot = self
            .forms
            .entry(name.to_owned())
            .or_insert_with(|| Arc::new(Form::fresh()));
        Arc::make_mut(slot)
    }
}

/// Key of the member of array `array_id` at position `index`: `"A.i"`.
pub fn field_key(array_id: &str, index: usize) -> String {
    format!("{array_id}.{index}")
}

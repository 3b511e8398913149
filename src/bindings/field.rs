//! Headless field binding: mount, edits, focus and blur.

use std::sync::Arc;

use crate::forms::{selectors, Field, FieldMeta, FormIntent, Value};
use crate::store::FormStore;

/// Caller-supplied validation. Returns the error to store, `None` if valid.
pub type Validator = Arc<dyn Fn(&Value) -> Option<Value> + Send + Sync>;

/// Mount options for a field.
#[derive(Clone, Default)]
pub struct FieldOptions {
    /// Value on mount and the baseline for `dirty` (default: empty string).
    pub initial: Option<Value>,
    pub validate: Option<Validator>,
}

impl FieldOptions {
    pub fn initial(mut self, value: Value) -> Self {
        self.initial = Some(value);
        self
    }

    pub fn validate<F>(mut self, validate: F) -> Self
    where
        F: Fn(&Value) -> Option<Value> + Send + Sync + 'static,
    {
        self.validate = Some(Arc::new(validate));
        self
    }
}

/// Handle to one mounted field.
#[derive(Clone)]
pub struct FieldBinding {
    store: FormStore,
    form: String,
    id: String,
    initial: Value,
    validate: Option<Validator>,
}

impl FieldBinding {
    /// Mount field `id` of `form`. An existing field keeps its state.
    pub(crate) fn mount(store: &FormStore, form: &str, id: String, options: FieldOptions) -> Self {
        let initial = options.initial.unwrap_or_else(|| Field::fresh().value);
        let binding = Self {
            store: store.clone(),
            form: form.to_string(),
            id,
            initial,
            validate: options.validate,
        };

        if selectors::field(form, &binding.id, &store.state()).is_none() {
            let mut field = Field::with_value(binding.initial.clone());
            field.error = binding.check(&binding.initial);
            store.dispatch(FormIntent::AddField {
                form: binding.form.clone(),
                id: binding.id.clone(),
                field,
            });
        }
        binding
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn form(&self) -> &str {
        &self.form
    }

    /// Record an edit.
    pub fn change(&self, value: Value) {
        let error = self.check(&value);
        let dirty = value != self.initial;
        self.store.dispatch(FormIntent::FieldChange {
            form: self.form.clone(),
            id: self.id.clone(),
            value,
            error,
            dirty,
        });
    }

    pub fn focus(&self) {
        self.store.dispatch(FormIntent::FieldFocus {
            form: self.form.clone(),
            id: self.id.clone(),
        });
    }

    /// Record leaving the input with its final value.
    pub fn blur(&self, value: Value) {
        let error = self.check(&value);
        let dirty = value != self.initial;
        self.store.dispatch(FormIntent::FieldBlur {
            form: self.form.clone(),
            id: self.id.clone(),
            value,
            error,
            dirty,
        });
    }

    pub fn value(&self) -> Option<Value> {
        selectors::field(&self.form, &self.id, &self.store.state()).map(|f| f.value.clone())
    }

    pub fn meta(&self) -> Option<FieldMeta> {
        selectors::field_meta(&self.form, &self.id, &self.store.state())
    }

    pub fn unmount(self) {
        self.store.dispatch(FormIntent::RemoveField {
            form: self.form,
            id: self.id,
        });
    }

    fn check(&self, value: &Value) -> Option<Value> {
        self.validate.as_ref().and_then(|validate| validate(value))
    }
}

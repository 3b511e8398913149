//! Read-only views derived from the forms tree.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::forms::model::{field_key, Field, FormsState, Value};

/// Field metadata handed to input renderers, without the value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldMeta {
    pub active: bool,
    pub dirty: bool,
    pub error: Option<Value>,
    pub touched: bool,
    pub visited: bool,
}

impl From<&Field> for FieldMeta {
    fn from(field: &Field) -> Self {
        Self {
            active: field.active,
            dirty: field.dirty,
            error: field.error.clone(),
            touched: field.touched,
            visited: field.visited,
        }
    }
}

/// True when no field of `form` carries an error. A missing form has no
/// fields to fail and counts as valid.
pub fn is_valid(form: &str, state: &FormsState) -> bool {
    state.form(form).map_or(true, |f| {
        f.fields.values().all(|field| field.error.is_none())
    })
}

/// Plain field-id to value map of `form`; empty when the form is missing.
pub fn collect_values(form: &str, state: &FormsState) -> BTreeMap<String, Value> {
    state
        .form(form)
        .map(|f| {
            f.fields
                .iter()
                .map(|(id, field)| (id.clone(), field.value.clone()))
                .collect()
        })
        .unwrap_or_default()
}

pub fn field<'a>(form: &str, id: &str, state: &'a FormsState) -> Option<&'a Field> {
    state.form(form)?.field(id)
}

pub fn field_meta(form: &str, id: &str, state: &FormsState) -> Option<FieldMeta> {
    field(form, id, state).map(FieldMeta::from)
}

pub fn array_len(form: &str, id: &str, state: &FormsState) -> Option<usize> {
    state.form(form)?.array_len(id)
}

/// Keys to render for array `id`: `id.0` through `id.(len - 1)`.
pub fn array_keys(form: &str, id: &str, state: &FormsState) -> Vec<String> {
    let len = array_len(form, id, state).unwrap_or(0);
    (0..len).map(|index| field_key(id, index)).collect()
}

pub fn is_submitting(form: &str, state: &FormsState) -> bool {
    state.form(form).is_some_and(|f| f.submitting)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::intent::FormIntent;
    use crate::forms::reducer::transition;
    use serde_json::json;

    fn signup() -> FormsState {
        let state = transition(
            FormsState::new(),
            FormIntent::AddForm {
                name: "signup".to_string(),
            },
        );
        transition(
            state,
            FormIntent::FieldChange {
                form: "signup".to_string(),
                id: "email".to_string(),
                value: json!("a@b.com"),
                error: None,
                dirty: true,
            },
        )
    }

    #[test]
    fn missing_form_is_valid_and_empty() {
        let state = FormsState::new();
        assert!(is_valid("nope", &state));
        assert!(collect_values("nope", &state).is_empty());
        assert!(array_keys("nope", "tags", &state).is_empty());
        assert!(!is_submitting("nope", &state));
    }

    #[test]
    fn error_makes_form_invalid() {
        let state = transition(
            signup(),
            FormIntent::FieldBlur {
                form: "signup".to_string(),
                id: "email".to_string(),
                value: json!("a@"),
                error: Some(json!("invalid email")),
                dirty: true,
            },
        );
        assert!(!is_valid("signup", &state));
    }

    #[test]
    fn collect_values_drops_metadata() {
        let values = collect_values("signup", &signup());
        assert_eq!(values.len(), 1);
        assert_eq!(values["email"], json!("a@b.com"));
    }

    #[test]
    fn meta_mirrors_field_flags() {
        let state = transition(
            signup(),
            FormIntent::FieldFocus {
                form: "signup".to_string(),
                id: "email".to_string(),
            },
        );
        let meta = field_meta("signup", "email", &state).unwrap();
        assert_eq!(
            meta,
            FieldMeta {
                active: true,
                dirty: true,
                error: None,
                touched: false,
                visited: true,
            }
        );
        assert!(field_meta("signup", "missing", &state).is_none());
    }

    #[test]
    fn array_keys_follow_length() {
        let mut state = transition(
            signup(),
            FormIntent::AddArray {
                form: "signup".to_string(),
                id: "tags".to_string(),
            },
        );
        for _ in 0..2 {
            state = transition(
                state,
                FormIntent::ArrayPush {
                    form: "signup".to_string(),
                    id: "tags".to_string(),
                },
            );
        }
        assert_eq!(array_keys("signup", "tags", &state), vec!["tags.0", "tags.1"]);
        assert_eq!(array_len("signup", "tags", &state), Some(2));
    }
}

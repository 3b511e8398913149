//! Shared test utilities.

#![allow(dead_code, unused_imports)]

use std::path::PathBuf;

use formstate::forms::{Field, FormIntent, FormsState, Value};
use formstate::transition;
use serde_json::json;
use tempfile::TempDir;

/// Apply intents in order, starting from `state`.
pub fn apply(state: FormsState, intents: Vec<FormIntent>) -> FormsState {
    intents.into_iter().fold(state, transition)
}

pub fn add_form(name: &str) -> FormIntent {
    FormIntent::AddForm {
        name: name.to_string(),
    }
}

pub fn add_field(form: &str, id: &str, value: Value) -> FormIntent {
    FormIntent::AddField {
        form: form.to_string(),
        id: id.to_string(),
        field: Field::with_value(value),
    }
}

pub fn remove_field(form: &str, id: &str) -> FormIntent {
    FormIntent::RemoveField {
        form: form.to_string(),
        id: id.to_string(),
    }
}

pub fn add_array(form: &str, id: &str) -> FormIntent {
    FormIntent::AddArray {
        form: form.to_string(),
        id: id.to_string(),
    }
}

/// Form `form` with array `id` whose slots hold `values`, every slot mounted.
pub fn filled_array(form: &str, id: &str, values: &[&str]) -> FormsState {
    let mut intents = vec![add_form(form), add_array(form, id)];
    for (index, value) in values.iter().enumerate() {
        intents.push(FormIntent::ArrayPush {
            form: form.to_string(),
            id: id.to_string(),
        });
        intents.push(add_field(form, &format!("{id}.{index}"), json!(value)));
    }
    apply(FormsState::new(), intents)
}

/// Keys of the members of array `id`, in map order.
pub fn member_keys(state: &FormsState, form: &str, id: &str) -> Vec<String> {
    let prefix = format!("{id}.");
    state
        .form(form)
        .map(|f| {
            f.fields
                .keys()
                .filter(|key| key.starts_with(&prefix))
                .cloned()
                .collect()
        })
        .unwrap_or_default()
}

/// Value stored at `form.fields[id]`.
pub fn value_at(state: &FormsState, form: &str, id: &str) -> Option<Value> {
    state
        .form(form)
        .and_then(|f| f.field(id))
        .map(|field| field.value.clone())
}

/// Create a temporary config file with the given TOML content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

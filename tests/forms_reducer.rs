mod common;

use common::{
    add_array, add_field, add_form, apply, filled_array, member_keys, remove_field, value_at,
};
use formstate::forms::{selectors, Field, FormIntent, FormsReducer, FormsState};
use formstate::mvi::Reducer;
use formstate::{collect_values, is_valid, transition};
use serde_json::json;

fn intent(kind: &str, payload: serde_json::Value) -> FormIntent {
    serde_json::from_value(json!({ "kind": kind, "payload": payload })).unwrap()
}

#[test]
fn add_form_is_idempotent() {
    let once = apply(FormsState::new(), vec![add_form("signup")]);
    let twice = apply(FormsState::new(), vec![add_form("signup"), add_form("signup")]);
    assert_eq!(once, twice);
}

#[test]
fn add_array_is_idempotent() {
    let once = apply(FormsState::new(), vec![add_form("f"), add_array("f", "tags")]);
    let twice = transition(once.clone(), add_array("f", "tags"));
    assert_eq!(once, twice);
}

#[test]
fn add_field_is_idempotent() {
    let once = apply(
        FormsState::new(),
        vec![add_form("f"), add_field("f", "email", json!(""))],
    );
    let twice = transition(once.clone(), add_field("f", "email", json!("")));
    assert_eq!(once, twice);
}

#[test]
fn add_then_remove_field_restores_field_map() {
    let before = apply(
        FormsState::new(),
        vec![add_form("f"), add_field("f", "keep", json!("x"))],
    );
    let after = apply(
        before.clone(),
        vec![add_field("f", "temp", json!("y")), remove_field("f", "temp")],
    );
    assert_eq!(
        after.form("f").unwrap().fields,
        before.form("f").unwrap().fields
    );
}

#[test]
fn remove_form_deletes_everything() {
    let state = apply(
        FormsState::new(),
        vec![add_form("f"), add_field("f", "a", json!(1)), add_form("g")],
    );
    let state = transition(
        state,
        FormIntent::RemoveForm {
            name: "f".to_string(),
        },
    );
    assert!(!state.contains_form("f"));
    assert!(state.contains_form("g"));
}

#[test]
fn touch_all_marks_every_field_and_keeps_values() {
    let state = apply(
        FormsState::new(),
        vec![
            add_form("f"),
            add_field("f", "a", json!("one")),
            FormIntent::FieldChange {
                form: "f".to_string(),
                id: "b".to_string(),
                value: json!(2),
                error: Some(json!("bad")),
                dirty: true,
            },
        ],
    );
    let state = transition(
        state,
        FormIntent::TouchAll {
            form: "f".to_string(),
        },
    );
    let form = state.form("f").unwrap();
    assert!(form.fields.values().all(|field| field.touched));
    assert_eq!(form.field("a").unwrap().value, json!("one"));
    assert_eq!(form.field("b").unwrap().value, json!(2));
    assert_eq!(form.field("b").unwrap().error, Some(json!("bad")));
}

#[test]
fn touch_all_on_missing_form_is_noop() {
    let state = transition(
        FormsState::new(),
        FormIntent::TouchAll {
            form: "ghost".to_string(),
        },
    );
    assert!(state.is_empty());
}

#[test]
fn submit_flag_only_follows_intents() {
    let state = apply(FormsState::new(), vec![add_form("f")]);
    let state = transition(
        state,
        FormIntent::SubmitStart {
            form: "f".to_string(),
        },
    );
    assert!(selectors::is_submitting("f", &state));
    let state = transition(
        state,
        FormIntent::SubmitStop {
            form: "f".to_string(),
        },
    );
    assert!(!selectors::is_submitting("f", &state));
}

#[test]
fn focus_then_blur_updates_flags() {
    let state = apply(
        FormsState::new(),
        vec![add_form("f"), add_field("f", "email", json!(""))],
    );
    let state = transition(
        state,
        FormIntent::FieldFocus {
            form: "f".to_string(),
            id: "email".to_string(),
        },
    );
    let field = state.form("f").unwrap().field("email").unwrap();
    assert!(field.active);
    assert!(field.visited);
    assert!(!field.touched);

    let state = transition(
        state,
        FormIntent::FieldBlur {
            form: "f".to_string(),
            id: "email".to_string(),
            value: json!("x@y.z"),
            error: None,
            dirty: true,
        },
    );
    let field = state.form("f").unwrap().field("email").unwrap();
    assert_eq!(
        *field,
        Field {
            value: json!("x@y.z"),
            error: None,
            dirty: true,
            touched: true,
            visited: true,
            active: false,
        }
    );
}

#[test]
fn previous_snapshot_is_never_mutated() {
    let before = apply(
        FormsState::new(),
        vec![add_form("f"), add_field("f", "a", json!("old"))],
    );
    let snapshot = before.clone();
    let _after = transition(
        before,
        FormIntent::FieldChange {
            form: "f".to_string(),
            id: "a".to_string(),
            value: json!("new"),
            error: None,
            dirty: true,
        },
    );
    assert_eq!(value_at(&snapshot, "f", "a"), Some(json!("old")));
}

#[test]
fn signup_scenario() {
    let state = apply(
        FormsState::new(),
        vec![
            intent("add-form", json!({"name": "signup"})),
            intent(
                "add-field",
                json!({"form": "signup", "id": "email", "field": Field::fresh()}),
            ),
            intent(
                "field-change",
                json!({
                    "form": "signup",
                    "id": "email",
                    "value": "a@b.com",
                    "error": null,
                    "dirty": true
                }),
            ),
        ],
    );

    assert!(is_valid("signup", &state));
    let values = collect_values("signup", &state);
    assert_eq!(values.len(), 1);
    assert_eq!(values["email"], json!("a@b.com"));
}

#[test]
fn tags_scenario() {
    let state = apply(
        FormsState::new(),
        vec![
            add_form("signup"),
            add_array("signup", "tags"),
            intent("array-push", json!({"form": "signup", "id": "tags"})),
            add_field("signup", "tags.0", json!("rust")),
            intent("array-push", json!({"form": "signup", "id": "tags"})),
            add_field("signup", "tags.1", json!("forms")),
        ],
    );
    assert_eq!(selectors::array_len("signup", "tags", &state), Some(2));

    let state = apply(
        state,
        vec![
            remove_field("signup", "tags.0"),
            intent(
                "array-remove",
                json!({"form": "signup", "id": "tags", "index": 0}),
            ),
        ],
    );
    assert_eq!(selectors::array_len("signup", "tags", &state), Some(1));
    assert_eq!(member_keys(&state, "signup", "tags"), vec!["tags.0"]);
    assert_eq!(value_at(&state, "signup", "tags.0"), Some(json!("forms")));
}

#[test]
fn unrecognized_intent_returns_input() {
    let state = filled_array("f", "tags", &["a", "b"]);
    let next = FormsReducer::reduce(state.clone(), FormIntent::Unrecognized);
    assert_eq!(next, state);
}

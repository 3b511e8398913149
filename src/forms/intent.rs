//! Events accepted by the forms reducer.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::forms::model::{Field, Value};
use crate::mvi::Intent;

/// Wire names of every kind the reducer handles.
const KNOWN_KINDS: [&str; 20] = [
    "add-form",
    "remove-form",
    "add-field",
    "remove-field",
    "touch-all",
    "submit-start",
    "submit-stop",
    "add-array",
    "remove-array",
    "array-push",
    "array-pop",
    "array-unshift",
    "array-shift",
    "array-insert",
    "array-remove",
    "array-swap",
    "array-move",
    "field-change",
    "field-focus",
    "field-blur",
];

/// Every way external code can change the form tree.
///
/// On the wire each intent is `{"kind": "<kebab-case>", "payload": {...}}`;
/// a kind this enum does not know decodes to [`FormIntent::Unrecognized`]
/// whatever its payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    remote = "Self",
    tag = "kind",
    content = "payload",
    rename_all = "kebab-case"
)]
pub enum FormIntent {
    /// Mount a form. Existing forms are left as they are.
    AddForm { name: String },
    RemoveForm { name: String },
    AddField {
        form: String,
        id: String,
        field: Field,
    },
    RemoveField { form: String, id: String },
    /// Mark every field of the form as touched (before a submit attempt).
    TouchAll { form: String },
    SubmitStart { form: String },
    SubmitStop { form: String },

    AddArray { form: String, id: String },
    RemoveArray { form: String, id: String },
    /// Grow the array by one; the new slot is filled by a later field mount.
    ArrayPush { form: String, id: String },
    /// Shrink the array by one; the last field is removed by its own unmount.
    ArrayPop { form: String, id: String },
    ArrayUnshift { form: String, id: String },
    ArrayShift { form: String, id: String },
    /// Open a slot right after `index`.
    ArrayInsert {
        form: String,
        id: String,
        index: usize,
    },
    ArrayRemove {
        form: String,
        id: String,
        index: usize,
    },
    ArraySwap {
        form: String,
        id: String,
        index1: usize,
        index2: usize,
    },
    ArrayMove {
        form: String,
        id: String,
        from: usize,
        to: usize,
    },

    FieldChange {
        form: String,
        id: String,
        value: Value,
        error: Option<Value>,
        dirty: bool,
    },
    FieldFocus { form: String, id: String },
    FieldBlur {
        form: String,
        id: String,
        value: Value,
        error: Option<Value>,
        dirty: bool,
    },

    #[serde(other)]
    Unrecognized,
}

impl Intent for FormIntent {}

impl Serialize for FormIntent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        FormIntent::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for FormIntent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = serde_json::Value::deserialize(deserializer)?;
        let kind = raw
            .get("kind")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::missing_field("kind"))?;
        if !KNOWN_KINDS.contains(&kind) {
            return Ok(FormIntent::Unrecognized);
        }
        FormIntent::deserialize(raw).map_err(D::Error::custom)
    }
}

impl FormIntent {
    /// Wire name of the intent kind.
    pub fn kind(&self) -> &'static str {
        match self {
            FormIntent::AddForm { .. } => "add-form",
            FormIntent::RemoveForm { .. } => "remove-form",
            FormIntent::AddField { .. } => "add-field",
            FormIntent::RemoveField { .. } => "remove-field",
            FormIntent::TouchAll { .. } => "touch-all",
            FormIntent::SubmitStart { .. } => "submit-start",
            FormIntent::SubmitStop { .. } => "submit-stop",
            FormIntent::AddArray { .. } => "add-array",
            FormIntent::RemoveArray { .. } => "remove-array",
            FormIntent::ArrayPush { .. } => "array-push",
            FormIntent::ArrayPop { .. } => "array-pop",
            FormIntent::ArrayUnshift { .. } => "array-unshift",
            FormIntent::ArrayShift { .. } => "array-shift",
            FormIntent::ArrayInsert { .. } => "array-insert",
            FormIntent::ArrayRemove { .. } => "array-remove",
            FormIntent::ArraySwap { .. } => "array-swap",
            FormIntent::ArrayMove { .. } => "array-move",
            FormIntent::FieldChange { .. } => "field-change",
            FormIntent::FieldFocus { .. } => "field-focus",
            FormIntent::FieldBlur { .. } => "field-blur",
            FormIntent::Unrecognized => "unrecognized",
        }
    }

    /// Name of the form the intent targets.
    pub fn form(&self) -> Option<&str> {
        match self {
            FormIntent::AddForm { name } | FormIntent::RemoveForm { name } => Some(name.as_str()),
            FormIntent::AddField { form, .. }
            | FormIntent::RemoveField { form, .. }
            | FormIntent::TouchAll { form }
            | FormIntent::SubmitStart { form }
            | FormIntent::SubmitStop { form }
            | FormIntent::AddArray { form, .. }
            | FormIntent::RemoveArray { form, .. }
            | FormIntent::ArrayPush { form, .. }
            | FormIntent::ArrayPop { form, .. }
            | FormIntent::ArrayUnshift { form, .. }
            | FormIntent::ArrayShift { form, .. }
            | FormIntent::ArrayInsert { form, .. }
            | FormIntent::ArrayRemove { form, .. }
            | FormIntent::ArraySwap { form, .. }
            | FormIntent::ArrayMove { form, .. }
            | FormIntent::FieldChange { form, .. }
            | FormIntent::FieldFocus { form, .. }
            | FormIntent::FieldBlur { form, .. } => Some(form.as_str()),
            FormIntent::Unrecognized => None,
        }
    }
}

//! Transition engine for the forms tree.

use std::sync::Arc;

use crate::forms::arrays::Reindex;
use crate::forms::intent::FormIntent;
use crate::forms::model::{Form, FormsState};
use crate::mvi::Reducer;

/// Reducer for the whole forms tree.
///
/// Pure and total: unknown forms, fields or arrays never fail. Writes
/// create the missing path from fresh defaults, removals of a missing path
/// and structural array intents on a missing form leave the tree as is.
pub struct FormsReducer;

impl Reducer for FormsReducer {
    type State = FormsState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Form
            FormIntent::AddForm { name } => {
                if !state.contains_form(&name) {
                    state.insert_form(name, Form::fresh());
                }
            }

            FormIntent::RemoveForm { name } => {
                state.remove_form(&name);
            }

            FormIntent::AddField { form, id, field } => {
                state
                    .form_entry(&form)
                    .fields_mut()
                    .insert(id, Arc::new(field));
            }

            FormIntent::RemoveField { form, id } => {
                state.update_form(&form, |form| {
                    if form.fields.contains_key(&id) {
                        form.fields_mut().remove(&id);
                    }
                });
            }

            FormIntent::TouchAll { form } => {
                state.update_form(&form, |form| {
                    if form.fields.values().all(|field| field.touched) {
                        return;
                    }
                    for field in form.fields_mut().values_mut() {
                        if !field.touched {
                            Arc::make_mut(field).touched = true;
                        }
                    }
                });
            }

            FormIntent::SubmitStart { form } => set_submitting(&mut state, &form, true),

            FormIntent::SubmitStop { form } => set_submitting(&mut state, &form, false),

            // Array
            FormIntent::AddArray { form, id } => {
                if state.form(&form).and_then(|f| f.array_len(&id)) != Some(0) {
                    state.form_entry(&form).arrays_mut().insert(id, 0);
                }
            }

            FormIntent::RemoveArray { form, id } => {
                state.update_form(&form, |form| {
                    if form.arrays.contains_key(&id) {
                        form.arrays_mut().remove(&id);
                    }
                });
            }

            FormIntent::ArrayPush { form, id } => {
                state.update_form(&form, |form| grow(form, &id));
            }

            FormIntent::ArrayPop { form, id } => {
                state.update_form(&form, |form| shrink(form, &id));
            }

            FormIntent::ArrayUnshift { form, id } => {
                state.update_form(&form, |form| {
                    reindex(form, &id, Reindex::Insert(0));
                    grow(form, &id);
                });
            }

            FormIntent::ArrayShift { form, id } => {
                state.update_form(&form, |form| {
                    reindex(form, &id, Reindex::Remove(0));
                    shrink(form, &id);
                });
            }

            FormIntent::ArrayInsert { form, id, index } => {
                state.update_form(&form, |form| {
                    reindex(form, &id, Reindex::Insert(index.saturating_add(1)));
                    grow(form, &id);
                });
            }

            FormIntent::ArrayRemove { form, id, index } => {
                state.update_form(&form, |form| {
                    reindex(form, &id, Reindex::Remove(index));
                    shrink(form, &id);
                });
            }

            FormIntent::ArraySwap {
                form,
                id,
                index1,
                index2,
            } => {
                state.update_form(&form, |form| {
                    reindex(form, &id, Reindex::Swap(index1, index2));
                });
            }

            FormIntent::ArrayMove { form, id, from, to } => {
                state.update_form(&form, |form| {
                    reindex(form, &id, Reindex::Move(from, to));
                });
            }

            // Field
            FormIntent::FieldChange {
                form,
                id,
                value,
                error,
                dirty,
            } => {
                let field = state.form_entry(&form).field_entry(&id);
                field.value = value;
                field.error = error;
                field.dirty = dirty;
            }

            FormIntent::FieldFocus { form, id } => {
                let field = state.form_entry(&form).field_entry(&id);
                field.active = true;
                field.visited = true;
            }

            FormIntent::FieldBlur {
                form,
                id,
                value,
                error,
                dirty,
            } => {
                let field = state.form_entry(&form).field_entry(&id);
                field.value = value;
                field.error = error;
                field.dirty = dirty;
                field.active = false;
                field.touched = true;
            }

            FormIntent::Unrecognized => {}
        }
        state
    }
}

/// Compute the tree that follows `state` once `intent` is applied.
pub fn transition(state: FormsState, intent: FormIntent) -> FormsState {
    FormsReducer::reduce(state, intent)
}

fn set_submitting(state: &mut FormsState, form: &str, submitting: bool) {
    if state.form(form).map(|f| f.submitting) != Some(submitting) {
        state.form_entry(form).submitting = submitting;
    }
}

fn grow(form: &mut Form, id: &str) {
    let len = form.arrays_mut().entry(id.to_owned()).or_insert(0);
    *len = len.saturating_add(1);
}

fn shrink(form: &mut Form, id: &str) {
    if form.array_len(id).is_some_and(|len| len > 0) {
        if let Some(len) = form.arrays_mut().get_mut(id) {
            *len -= 1;
        }
    }
}

/// Re-key the members of array `id`: its fields, and the lengths of arrays
/// nested inside its items.
fn reindex(form: &mut Form, id: &str, op: Reindex) {
    op.apply_shared(&mut form.fields, id);
    op.apply_shared(&mut form.arrays, id);
}

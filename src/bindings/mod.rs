//! Headless bindings between a UI layer and the forms store.
//!
//! Each handle mirrors one UI component (form, field, field array): it
//! turns component lifecycle and input callbacks into intents and reads
//! its view back from the current snapshot. Rendering stays with the caller.

mod array;
mod error;
mod field;
mod form;

pub use array::{ArrayItem, FieldArrayBinding};
pub use error::BindingError;
pub use field::{FieldBinding, FieldOptions, Validator};
pub use form::{FormBinding, FormOptions, SubmitOutcome};

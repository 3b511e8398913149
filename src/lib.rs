//! Client-side form-state container.
//!
//! A stream of discrete UI events (field edits, focus changes, submit
//! attempts, dynamic list mutations) drives an immutable tree of forms,
//! fields and field arrays. The tree is advanced by a pure reducer and
//! read through selectors.

pub mod bindings;
pub mod config;
pub mod forms;
pub mod logging;
pub mod mvi;
pub mod store;

pub use forms::{collect_values, is_valid, transition, FormIntent, FormsState};
pub use store::FormStore;

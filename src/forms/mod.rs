//! Form state core.
//!
//! Normalized, immutable tree of every active form, its fields and its
//! dynamic field arrays, plus the pure engine that advances it.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `model.rs` - Tree shapes (`FormsState` → `Form` → `Field`) and fresh defaults
//! - `intent.rs` - Discrete UI events (`FormIntent`)
//! - `arrays.rs` - Re-keying of array members under insert, remove, swap and move
//! - `reducer.rs` - State transitions (pure, total, structurally shared)
//! - `selectors.rs` - Derived views (validity, collected values, field meta)

pub mod arrays;
mod intent;
mod model;
mod reducer;
pub mod selectors;

pub use arrays::Reindex;
pub use intent::FormIntent;
pub use model::{field_key, ArrayMap, Field, FieldMap, Form, FormsState, Value};
pub use reducer::{transition, FormsReducer};
pub use selectors::{collect_values, is_valid, FieldMeta};

//! Model-View-Intent (MVI) primitives.
//!
//! Base traits for the unidirectional data flow every form state change
//! goes through.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ StateTree ──→ Selectors
//!    ↑                                    │
//!    └────────────────────────────────────┘
//! ```
//!
//! - **StateTree**: Immutable snapshot of all form state
//! - **Intent**: Discrete UI events (edits, focus changes, list mutations)
//! - **Reducer**: Pure function that computes the next tree from an intent

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::StateTree;

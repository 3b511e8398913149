//! Base trait for intents (discrete events) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Field edits, focus and blur
/// - Form lifecycle (mount, unmount, submit)
/// - Structural list mutations (push, insert, swap, move)
///
/// Intents are consumed by reducers to produce new state trees.
pub trait Intent: Send + 'static {}

//! Base trait for state trees in MVI architecture.

/// Marker trait for state tree snapshots.
///
/// Trees should be:
/// - Immutable once published (Clone to derive the next tree)
/// - Self-contained (everything selectors need to compute views)
/// - Comparable (PartialEq for detecting changes)
pub trait StateTree: Clone + PartialEq + Default + Send + Sync + 'static {}

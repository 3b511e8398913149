//! Reducer trait for MVI architecture.

use super::intent::Intent;
use super::state::StateTree;

/// Reducer transforms a state tree based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure, total function: (State, Intent) -> State
pub trait Reducer {
    /// The state tree this reducer operates on.
    type State: StateTree;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// Apply an intent and return the next state tree.
    ///
    /// Never fails and has no side effects. Intents that do not apply
    /// to the current tree return it unchanged.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}

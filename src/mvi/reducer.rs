//! Reducer trait for MVI architecture.

use super::effect::Effect;
use super::intent::Intent;
use super::state::UiState;

/// Reducer transforms state based on intents.
///
/// The reducer is the only place where state transitions happen.
/// It must be a pure function: (State, Intent) -> (State, Effects).
/// Effects describe what should happen as a result of the transition;
/// executing them (network calls, notifications) is the store's job.
pub trait Reducer {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The intent type this reducer handles.
    type Intent: Intent;

    /// The effect type this reducer emits.
    type Effect: Effect;

    /// Process an intent and return the new state plus any effects.
    ///
    /// This must be a pure function with no side effects of its own.
    fn reduce(state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>);
}

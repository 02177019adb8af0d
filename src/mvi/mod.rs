//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow across the client.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ (State, Effects) ──→ View
//!    ↑                                          │
//!    └──────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a feature's state
//! - **Intent**: User actions or system events (e.g. API responses)
//! - **Effect**: One-shot outputs of a transition (notifications,
//!   navigation, fetch commands) — delivered outside of state
//! - **Reducer**: Pure function that transforms state based on intents

mod effect;
mod intent;
mod reducer;
mod state;

pub use effect::Effect;
pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;

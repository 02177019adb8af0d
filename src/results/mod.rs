//! Results feature: fetch historical rates for a fixed selection handed
//! off from the selection screen, and support a manual retry.

mod effect;
mod intent;
mod reducer;
mod state;
mod store;

pub use effect::ResultsEffect;
pub use intent::ResultsIntent;
pub use reducer::ResultsReducer;
pub use state::ResultsState;
pub use store::ResultsStore;

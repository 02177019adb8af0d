//! Currency selection feature: pick base currency, target currencies,
//! amount, and date; confirm to hand off to the results feature.

mod effect;
mod intent;
mod reducer;
mod state;
mod store;

pub use effect::SelectionEffect;
pub use intent::SelectionIntent;
pub use reducer::{SelectionReducer, EMPTY_SELECTION_MESSAGE};
pub use state::SelectionState;
pub use store::SelectionStore;

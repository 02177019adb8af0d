//! Currency conversion client for Frankfurter-compatible rate services.
//!
//! The core is a pair of unidirectional-data-flow state machines:
//! [`selection`] picks a base currency, target currencies, amount, and
//! date; [`results`] fetches historical rates for the confirmed
//! selection. Both follow the intent → reducer → (state, effects)
//! pattern from [`mvi`], with all I/O behind the [`gateway`] trait.

pub mod cli;
pub mod gateway;
pub mod model;
pub mod mvi;
pub mod results;
pub mod selection;

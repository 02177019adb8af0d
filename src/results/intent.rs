use std::collections::BTreeMap;

use crate::model::CurrencyCode;
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ResultsIntent {
    /// Start the initial fetch. No-op when no targets were handed off.
    LoadRates,
    /// Re-run the fetch with the stored parameters, verbatim.
    RetryLoadRates,
    /// Gateway response: unit rates for the requested targets.
    RatesLoaded(BTreeMap<CurrencyCode, f64>),
    /// Gateway response: fetch failed.
    RatesFailed(String),
}

impl Intent for ResultsIntent {}

use std::collections::BTreeSet;

use crate::model::CurrencyCode;
use crate::mvi::Effect;

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsEffect {
    /// Command: fetch rates with a snapshot of the stored parameters.
    /// Executed by the store, never forwarded to observers.
    FetchRates {
        date: String,
        base: CurrencyCode,
        targets: BTreeSet<CurrencyCode>,
    },
    /// Transient user-facing error notification.
    ShowError(String),
}

impl Effect for ResultsEffect {}

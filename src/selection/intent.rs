use std::collections::BTreeSet;

use crate::model::{CurrencyCatalog, CurrencyCode};
use crate::mvi::Intent;

#[derive(Debug, Clone)]
pub enum SelectionIntent {
    /// Set the base currency. No catalog membership check; the view is
    /// expected to offer only catalog entries.
    ChangeFromCurrency(CurrencyCode),
    /// Symmetric-difference toggle: remove if present, add if absent.
    ToggleToCurrency(CurrencyCode),
    /// Select every catalog currency (true) or none (false).
    ToggleAllCurrencies(bool),
    /// Unconditional overwrite of the target set.
    ReplaceSelectedCurrencies(BTreeSet<CurrencyCode>),
    /// Store raw amount text verbatim.
    ChangeAmount(String),
    /// Store the ISO date string verbatim.
    ChangeDate(String),
    /// Start (or restart) loading the currency catalog.
    LoadCurrencies,
    /// Gateway response: catalog fetched.
    CatalogLoaded(CurrencyCatalog),
    /// Gateway response: catalog fetch failed.
    CatalogFailed(String),
    /// Confirm the selection and request navigation to results.
    NavigateToResults,
}

impl Intent for SelectionIntent {}

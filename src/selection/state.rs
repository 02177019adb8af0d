use std::collections::BTreeSet;

use crate::model::{today_utc, CurrencyCatalog, CurrencyCode};
use crate::mvi::UiState;

/// State of the currency selection screen.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub from_currency: CurrencyCode,
    /// Target currencies. Must be non-empty before navigation proceeds;
    /// enforced at navigation time, not on every toggle.
    pub to_currencies: BTreeSet<CurrencyCode>,
    /// Raw user text; parsed only at display time.
    pub amount: String,
    /// ISO date string "YYYY-MM-DD".
    pub selected_date: String,
    pub catalog: CurrencyCatalog,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            from_currency: CurrencyCode::new("EUR"),
            to_currencies: BTreeSet::new(),
            amount: "1".to_string(),
            selected_date: today_utc(),
            catalog: CurrencyCatalog::new(),
            is_loading: false,
            error: None,
        }
    }
}

impl UiState for SelectionState {}

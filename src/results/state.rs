use std::collections::BTreeSet;

use crate::model::{CurrencyCode, Rate, ResultsParams};
use crate::mvi::UiState;

/// State of the results screen.
///
/// Seeded once from [`ResultsParams`]; the selection fields are fixed
/// for the lifetime of the screen. Changing them means going back.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsState {
    pub from_currency: CurrencyCode,
    pub to_currencies: BTreeSet<CurrencyCode>,
    pub amount: String,
    pub selected_date: String,
    /// Unit rates in requested target-currency order. Left untouched by
    /// a failed fetch so a failed retry never blanks shown results.
    pub rates: Vec<Rate>,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl Default for ResultsState {
    fn default() -> Self {
        Self::from_params(ResultsParams::default())
    }
}

impl ResultsState {
    pub fn from_params(params: ResultsParams) -> Self {
        Self {
            from_currency: params.from_currency,
            to_currencies: params.to_currencies,
            amount: params.amount,
            selected_date: params.date,
            rates: Vec::new(),
            is_loading: false,
            error: None,
        }
    }
}

impl UiState for ResultsState {}

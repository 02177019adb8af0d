//! Reducer for the currency selection screen.

use crate::model::ResultsParams;
use crate::mvi::Reducer;

use super::effect::SelectionEffect;
use super::intent::SelectionIntent;
use super::state::SelectionState;

/// Shown when the user confirms with no target currency selected.
pub const EMPTY_SELECTION_MESSAGE: &str = "Select at least one target currency";

pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;
    type Effect = SelectionEffect;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            SelectionIntent::ChangeFromCurrency(code) => {
                state.from_currency = code;
                (state, vec![])
            }

            SelectionIntent::ToggleToCurrency(code) => {
                if !state.to_currencies.remove(&code) {
                    state.to_currencies.insert(code);
                }
                (state, vec![])
            }

            SelectionIntent::ToggleAllCurrencies(select_all) => {
                state.to_currencies = if select_all {
                    state.catalog.keys().cloned().collect()
                } else {
                    Default::default()
                };
                (state, vec![])
            }

            SelectionIntent::ReplaceSelectedCurrencies(currencies) => {
                state.to_currencies = currencies;
                (state, vec![])
            }

            SelectionIntent::ChangeAmount(amount) => {
                state.amount = amount;
                (state, vec![])
            }

            SelectionIntent::ChangeDate(date) => {
                state.selected_date = date;
                (state, vec![])
            }

            SelectionIntent::LoadCurrencies => {
                state.is_loading = true;
                state.error = None;
                (state, vec![SelectionEffect::LoadCatalog])
            }

            SelectionIntent::CatalogLoaded(catalog) => {
                // Auto-select every currency on a fresh catalog.
                state.to_currencies = catalog.keys().cloned().collect();
                state.catalog = catalog;
                state.is_loading = false;
                state.error = None;
                (state, vec![])
            }

            SelectionIntent::CatalogFailed(message) => {
                state.is_loading = false;
                state.error = Some(message.clone());
                (state, vec![SelectionEffect::ShowError(message)])
            }

            SelectionIntent::NavigateToResults => {
                if state.to_currencies.is_empty() {
                    let effect = SelectionEffect::ShowError(EMPTY_SELECTION_MESSAGE.to_string());
                    return (state, vec![effect]);
                }
                let params = ResultsParams {
                    from_currency: state.from_currency.clone(),
                    to_currencies: state.to_currencies.clone(),
                    amount: state.amount.clone(),
                    date: state.selected_date.clone(),
                };
                (state, vec![SelectionEffect::Navigate(params)])
            }
        }
    }
}

//! Reducer for the results screen.

use crate::model::Rate;
use crate::mvi::Reducer;

use super::effect::ResultsEffect;
use super::intent::ResultsIntent;
use super::state::ResultsState;

pub struct ResultsReducer;

impl Reducer for ResultsReducer {
    type State = ResultsState;
    type Intent = ResultsIntent;
    type Effect = ResultsEffect;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> (Self::State, Vec<Self::Effect>) {
        match intent {
            ResultsIntent::LoadRates | ResultsIntent::RetryLoadRates => {
                if state.to_currencies.is_empty() {
                    return (state, vec![]);
                }
                state.is_loading = true;
                state.error = None;
                let effect = ResultsEffect::FetchRates {
                    date: state.selected_date.clone(),
                    base: state.from_currency.clone(),
                    targets: state.to_currencies.clone(),
                };
                (state, vec![effect])
            }

            ResultsIntent::RatesLoaded(rates) => {
                // Requested target order, not response order.
                state.rates = state
                    .to_currencies
                    .iter()
                    .filter_map(|code| {
                        rates.get(code).map(|rate| Rate {
                            currency: code.clone(),
                            rate: *rate,
                        })
                    })
                    .collect();
                state.is_loading = false;
                state.error = None;
                (state, vec![])
            }

            ResultsIntent::RatesFailed(message) => {
                // rates stays untouched so a failed retry keeps showing
                // the previous results.
                state.is_loading = false;
                state.error = Some(message.clone());
                (state, vec![ResultsEffect::ShowError(message)])
            }
        }
    }
}

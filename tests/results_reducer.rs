mod common;

use std::collections::BTreeMap;

use common::targets;
use fxconv::model::{CurrencyCode, Rate, ResultsParams};
use fxconv::mvi::Reducer;
use fxconv::results::{ResultsEffect, ResultsIntent, ResultsReducer, ResultsState};

fn seeded() -> ResultsState {
    ResultsState::from_params(ResultsParams {
        from_currency: CurrencyCode::new("EUR"),
        to_currencies: targets(&["USD", "GBP"]),
        amount: "100".to_string(),
        date: "2025-06-30".to_string(),
    })
}

fn rates(pairs: &[(&str, f64)]) -> BTreeMap<CurrencyCode, f64> {
    pairs
        .iter()
        .map(|(code, rate)| (CurrencyCode::new(code), *rate))
        .collect()
}

#[test]
fn seeding_applies_handoff_parameters() {
    let state = seeded();
    assert_eq!(state.from_currency, CurrencyCode::new("EUR"));
    assert_eq!(state.to_currencies, targets(&["USD", "GBP"]));
    assert_eq!(state.amount, "100");
    assert_eq!(state.selected_date, "2025-06-30");
    assert!(state.rates.is_empty());
    assert!(!state.is_loading);
}

#[test]
fn defaults_apply_when_handoff_is_absent() {
    let state = ResultsState::default();
    assert_eq!(state.from_currency, CurrencyCode::new("EUR"));
    assert!(state.to_currencies.is_empty());
    assert_eq!(state.amount, "1");
    assert_eq!(state.selected_date.len(), 10);
}

#[test]
fn successful_fetch_populates_rates() {
    let (state, _) = ResultsReducer::reduce(seeded(), ResultsIntent::LoadRates);
    assert!(state.is_loading);

    let (state, effects) = ResultsReducer::reduce(
        state,
        ResultsIntent::RatesLoaded(rates(&[("USD", 0.85), ("GBP", 0.73)])),
    );
    assert!(effects.is_empty());
    assert!(!state.is_loading);
    assert_eq!(state.error, None);
    assert_eq!(
        state.rates,
        vec![
            Rate {
                currency: CurrencyCode::new("GBP"),
                rate: 0.73,
            },
            Rate {
                currency: CurrencyCode::new("USD"),
                rate: 0.85,
            },
        ]
    );
}

#[test]
fn failed_fetch_records_error_and_keeps_rates() {
    let (state, _) = ResultsReducer::reduce(
        seeded(),
        ResultsIntent::RatesLoaded(rates(&[("USD", 0.85), ("GBP", 0.73)])),
    );
    let before = state.rates.clone();

    let (state, _) = ResultsReducer::reduce(state, ResultsIntent::RetryLoadRates);
    let (state, effects) =
        ResultsReducer::reduce(state, ResultsIntent::RatesFailed("timeout".to_string()));

    assert_eq!(state.error.as_deref(), Some("timeout"));
    assert!(!state.is_loading);
    assert_eq!(state.rates, before);
    assert_eq!(
        effects,
        vec![ResultsEffect::ShowError("timeout".to_string())]
    );
}

#[test]
fn retry_reissues_identical_fetch_parameters() {
    let (state, first) = ResultsReducer::reduce(seeded(), ResultsIntent::LoadRates);
    let (state, _) =
        ResultsReducer::reduce(state, ResultsIntent::RatesFailed("timeout".to_string()));
    let (_, second) = ResultsReducer::reduce(state, ResultsIntent::RetryLoadRates);
    assert_eq!(first, second);
}

#[test]
fn retry_clears_the_recorded_error() {
    let (state, _) =
        ResultsReducer::reduce(seeded(), ResultsIntent::RatesFailed("timeout".to_string()));
    let (state, _) = ResultsReducer::reduce(state, ResultsIntent::RetryLoadRates);
    assert_eq!(state.error, None);
    assert!(state.is_loading);
}

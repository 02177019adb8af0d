//! Command-line presentation layer.
//!
//! A thin collaborator with no decision logic of its own: it dispatches
//! intents into the stores, waits for state to settle, and prints it.
//! Validation (empty selection, error recording) lives in the reducers.

use std::collections::BTreeSet;
use std::sync::Arc;

use anyhow::bail;
use clap::Parser;

use crate::gateway::{FrankfurterGateway, RateGateway, DEFAULT_BASE_URL};
use crate::model::CurrencyCode;
use crate::results::ResultsStore;
use crate::selection::{SelectionEffect, SelectionIntent, SelectionStore};

#[derive(Parser, Debug)]
#[command(
    name = "fxconv",
    about = "Convert an amount between currencies using historical exchange rates"
)]
pub struct Cli {
    /// Base currency code
    #[arg(long, default_value = "EUR")]
    pub from: String,

    /// Target currency codes, comma-separated. Defaults to every
    /// currency the service knows.
    #[arg(long, value_delimiter = ',')]
    pub to: Vec<String>,

    /// Amount to convert
    #[arg(long, default_value = "1")]
    pub amount: String,

    /// Rate date (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub date: Option<String>,

    /// Base URL of the rate service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub api_url: String,

    /// List available currencies and exit
    #[arg(long)]
    pub list: bool,
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let gateway: Arc<dyn RateGateway> = Arc::new(FrankfurterGateway::new(&cli.api_url));

    let (selection, mut selection_effects) = SelectionStore::new(Arc::clone(&gateway));

    // The catalog load was dispatched on creation; settle on either a
    // loaded catalog or a recorded error.
    let mut state_rx = selection.state();
    state_rx
        .wait_for(|s| !s.catalog.is_empty() || s.error.is_some())
        .await?;

    let loaded = selection.current();
    if let Some(error) = loaded.error {
        bail!("failed to load currencies: {error}");
    }

    if cli.list {
        for (code, name) in &loaded.catalog {
            println!("{code}  {name}");
        }
        return Ok(());
    }

    selection.dispatch(SelectionIntent::ChangeFromCurrency(CurrencyCode::new(
        &cli.from,
    )));
    if !cli.to.is_empty() {
        let targets: BTreeSet<CurrencyCode> = cli.to.iter().map(CurrencyCode::new).collect();
        selection.dispatch(SelectionIntent::ReplaceSelectedCurrencies(targets));
    }
    selection.dispatch(SelectionIntent::ChangeAmount(cli.amount.clone()));
    if let Some(date) = cli.date.clone() {
        selection.dispatch(SelectionIntent::ChangeDate(date));
    }
    selection.dispatch(SelectionIntent::NavigateToResults);

    let params = loop {
        match selection_effects.recv().await {
            Some(SelectionEffect::Navigate(params)) => break params,
            Some(SelectionEffect::ShowError(message)) => bail!(message),
            Some(SelectionEffect::LoadCatalog) => continue,
            None => bail!("selection store closed unexpectedly"),
        }
    };

    let (results, _results_effects) = ResultsStore::new(gateway, params);
    let mut results_rx = results.state();
    results_rx
        .wait_for(|s| !s.rates.is_empty() || s.error.is_some())
        .await?;

    let state = results.current();
    if let Some(error) = state.error {
        bail!("failed to load rates: {error}");
    }

    for rate in &state.rates {
        println!(
            "{} {} = {:.2} {}",
            state.amount,
            state.from_currency,
            rate.converted(&state.amount),
            rate.currency
        );
    }

    Ok(())
}

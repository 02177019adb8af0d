//! Store owning the results state.
//!
//! Same shape as the selection store: intents in submission order, fetch
//! effects executed on spawned tasks with generation fencing, state via
//! watch, one-shot notifications via a bounded channel.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::gateway::RateGateway;
use crate::model::ResultsParams;
use crate::mvi::Reducer;

use super::effect::ResultsEffect;
use super::intent::ResultsIntent;
use super::reducer::ResultsReducer;
use super::state::ResultsState;

/// Handle to a running results store.
///
/// Dropping the handle shuts the store down and aborts any in-flight
/// rates fetch.
pub struct ResultsStore {
    intents: mpsc::UnboundedSender<ResultsIntent>,
    state: watch::Receiver<ResultsState>,
}

impl ResultsStore {
    /// Spawn the store, seeded from the handoff parameters. The initial
    /// fetch is dispatched immediately; with no targets it is a no-op.
    pub fn new(
        gateway: Arc<dyn RateGateway>,
        params: ResultsParams,
    ) -> (Self, mpsc::Receiver<ResultsEffect>) {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(ResultsState::from_params(params));
        let (effect_tx, effect_rx) = mpsc::channel(1);

        tokio::spawn(run(gateway, intent_rx, state_tx, effect_tx));

        let store = Self {
            intents: intent_tx,
            state: state_rx,
        };
        store.dispatch(ResultsIntent::LoadRates);
        (store, effect_rx)
    }

    /// Queue an intent for processing.
    pub fn dispatch(&self, intent: ResultsIntent) {
        if self.intents.send(intent).is_err() {
            tracing::debug!("results store is gone; intent dropped");
        }
    }

    /// Watch state snapshots as they are published.
    pub fn state(&self) -> watch::Receiver<ResultsState> {
        self.state.clone()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> ResultsState {
        self.state.borrow().clone()
    }
}

async fn run(
    gateway: Arc<dyn RateGateway>,
    mut intents: mpsc::UnboundedReceiver<ResultsIntent>,
    state_tx: watch::Sender<ResultsState>,
    effect_tx: mpsc::Sender<ResultsEffect>,
) {
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(u64, ResultsIntent)>();
    let mut generation: u64 = 0;
    let mut in_flight: Option<JoinHandle<()>> = None;

    loop {
        let intent = tokio::select! {
            intent = intents.recv() => match intent {
                Some(intent) => intent,
                None => break,
            },
            Some((gen, intent)) = done_rx.recv() => {
                if gen != generation {
                    tracing::debug!(gen, latest = generation, "discarding stale rates response");
                    continue;
                }
                intent
            }
        };

        let (next, effects) = ResultsReducer::reduce(state_tx.borrow().clone(), intent);
        state_tx.send_replace(next);

        for effect in effects {
            match effect {
                ResultsEffect::FetchRates {
                    date,
                    base,
                    targets,
                } => {
                    generation += 1;
                    let gen = generation;
                    let gateway = Arc::clone(&gateway);
                    let done_tx = done_tx.clone();
                    in_flight = Some(tokio::spawn(async move {
                        let intent = match gateway.historical_rates(&date, &base, &targets).await
                        {
                            Ok(rates) => ResultsIntent::RatesLoaded(rates),
                            Err(err) => ResultsIntent::RatesFailed(err.to_string()),
                        };
                        let _ = done_tx.send((gen, intent));
                    }));
                }
                effect => {
                    if effect_tx.try_send(effect).is_err() {
                        tracing::debug!("effect slot occupied or observer gone; effect dropped");
                    }
                }
            }
        }
    }

    if let Some(handle) = in_flight {
        handle.abort();
    }
}

//! Store owning the selection state.
//!
//! Applies intents strictly in submission order, executes fetch effects
//! on spawned tasks, publishes state snapshots through a watch channel,
//! and forwards one-shot notification effects to a bounded channel.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use crate::gateway::RateGateway;
use crate::mvi::Reducer;

use super::effect::SelectionEffect;
use super::intent::SelectionIntent;
use super::reducer::SelectionReducer;
use super::state::SelectionState;

/// Handle to a running selection store.
///
/// Dropping the handle shuts the store down and aborts any in-flight
/// catalog fetch.
pub struct SelectionStore {
    intents: mpsc::UnboundedSender<SelectionIntent>,
    state: watch::Receiver<SelectionState>,
}

impl SelectionStore {
    /// Spawn the store. The catalog load is dispatched immediately.
    ///
    /// Returns the handle plus the one-shot effect receiver. The effect
    /// channel holds one pending notification; an effect emitted while
    /// the slot is full is dropped, not queued.
    pub fn new(gateway: Arc<dyn RateGateway>) -> (Self, mpsc::Receiver<SelectionEffect>) {
        let (intent_tx, intent_rx) = mpsc::unbounded_channel();
        let (state_tx, state_rx) = watch::channel(SelectionState::default());
        let (effect_tx, effect_rx) = mpsc::channel(1);

        tokio::spawn(run(gateway, intent_rx, state_tx, effect_tx));

        let store = Self {
            intents: intent_tx,
            state: state_rx,
        };
        store.dispatch(SelectionIntent::LoadCurrencies);
        (store, effect_rx)
    }

    /// Queue an intent for processing.
    pub fn dispatch(&self, intent: SelectionIntent) {
        if self.intents.send(intent).is_err() {
            tracing::debug!("selection store is gone; intent dropped");
        }
    }

    /// Watch state snapshots as they are published.
    pub fn state(&self) -> watch::Receiver<SelectionState> {
        self.state.clone()
    }

    /// Snapshot of the current state.
    pub fn current(&self) -> SelectionState {
        self.state.borrow().clone()
    }
}

async fn run(
    gateway: Arc<dyn RateGateway>,
    mut intents: mpsc::UnboundedReceiver<SelectionIntent>,
    state_tx: watch::Sender<SelectionState>,
    effect_tx: mpsc::Sender<SelectionEffect>,
) {
    // Gateway responses come back through their own channel, tagged with
    // the fetch generation. A completion that is not from the latest
    // dispatched fetch is stale and gets discarded (last-dispatched-wins).
    let (done_tx, mut done_rx) = mpsc::unbounded_channel::<(u64, SelectionIntent)>();
    let mut generation: u64 = 0;
    let mut in_flight: Option<JoinHandle<()>> = None;

    loop {
        let intent = tokio::select! {
            intent = intents.recv() => match intent {
                Some(intent) => intent,
                // Handle dropped: shut down.
                None => break,
            },
            Some((gen, intent)) = done_rx.recv() => {
                if gen != generation {
                    tracing::debug!(gen, latest = generation, "discarding stale catalog response");
                    continue;
                }
                intent
            }
        };

        let (next, effects) = SelectionReducer::reduce(state_tx.borrow().clone(), intent);
        state_tx.send_replace(next);

        for effect in effects {
            match effect {
                SelectionEffect::LoadCatalog => {
                    generation += 1;
                    let gen = generation;
                    let gateway = Arc::clone(&gateway);
                    let done_tx = done_tx.clone();
                    in_flight = Some(tokio::spawn(async move {
                        let intent = match gateway.list_currencies().await {
                            Ok(catalog) => SelectionIntent::CatalogLoaded(catalog),
                            Err(err) => SelectionIntent::CatalogFailed(err.to_string()),
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

//! Shared test utilities and mock infrastructure.

#![allow(dead_code)]

use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use fxconv::gateway::{GatewayError, RateGateway};
use fxconv::model::{CurrencyCatalog, CurrencyCode};

/// A captured historical-rates request for assertions.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRatesRequest {
    pub date: String,
    pub base: CurrencyCode,
    pub targets: BTreeSet<CurrencyCode>,
}

/// A scripted rates response, optionally delayed to simulate a slow
/// network call.
pub struct ScriptedRates {
    pub delay: Duration,
    pub result: Result<BTreeMap<CurrencyCode, f64>, String>,
}

/// Scripted [`RateGateway`] double.
///
/// The catalog response is fixed at construction; rates responses are a
/// FIFO queue consumed per call. Every rates call is captured.
pub struct MockGateway {
    catalog: Result<CurrencyCatalog, String>,
    rates: Mutex<VecDeque<ScriptedRates>>,
    rates_requests: Mutex<Vec<CapturedRatesRequest>>,
}

impl MockGateway {
    pub fn with_catalog(pairs: &[(&str, &str)]) -> Arc<Self> {
        Arc::new(Self {
            catalog: Ok(catalog(pairs)),
            rates: Mutex::new(VecDeque::new()),
            rates_requests: Mutex::new(Vec::new()),
        })
    }

    pub fn failing_catalog(message: &str) -> Arc<Self> {
        Arc::new(Self {
            catalog: Err(message.to_string()),
            rates: Mutex::new(VecDeque::new()),
            rates_requests: Mutex::new(Vec::new()),
        })
    }

    pub async fn push_rates(&self, pairs: &[(&str, f64)]) {
        self.push_rates_delayed(Duration::ZERO, pairs).await;
    }

    pub async fn push_rates_delayed(&self, delay: Duration, pairs: &[(&str, f64)]) {
        self.rates.lock().await.push_back(ScriptedRates {
            delay,
            result: Ok(pairs
                .iter()
                .map(|(code, rate)| (CurrencyCode::new(code), *rate))
                .collect()),
        });
    }

    pub async fn push_rates_error(&self, message: &str) {
        self.rates.lock().await.push_back(ScriptedRates {
            delay: Duration::ZERO,
            result: Err(message.to_string()),
        });
    }

    pub async fn captured(&self) -> Vec<CapturedRatesRequest> {
        self.rates_requests.lock().await.clone()
    }
}

#[async_trait]
impl RateGateway for MockGateway {
    async fn list_currencies(&self) -> Result<CurrencyCatalog, GatewayError> {
        match &self.catalog {
            Ok(catalog) => Ok(catalog.clone()),
            Err(message) => Err(GatewayError::Decode(message.clone())),
        }
    }

    async fn historical_rates(
        &self,
        date: &str,
        base: &CurrencyCode,
        targets: &BTreeSet<CurrencyCode>,
    ) -> Result<BTreeMap<CurrencyCode, f64>, GatewayError> {
        let scripted = self.rates.lock().await.pop_front();
        self.rates_requests.lock().await.push(CapturedRatesRequest {
            date: date.to_string(),
            base: base.clone(),
            targets: targets.clone(),
        });

        let Some(scripted) = scripted else {
            return Err(GatewayError::Decode("no scripted response".to_string()));
        };
        if !scripted.delay.is_zero() {
            tokio::time::sleep(scripted.delay).await;
        }
        scripted.result.map_err(GatewayError::Decode)
    }
}

/// Build a catalog from (code, display name) pairs.
pub fn catalog(pairs: &[(&str, &str)]) -> CurrencyCatalog {
    pairs
        .iter()
        .map(|(code, name)| (CurrencyCode::new(code), name.to_string()))
        .collect()
}

/// Build a target set from codes.
pub fn targets(codes: &[&str]) -> BTreeSet<CurrencyCode> {
    codes.iter().map(CurrencyCode::new).collect()
}

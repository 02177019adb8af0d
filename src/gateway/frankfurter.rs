//! Frankfurter-compatible HTTP implementation of [`RateGateway`].
//!
//! Wire contract:
//! - `GET {base_url}/currencies` → `{ "USD": "United States Dollar", ... }`
//! - `GET {base_url}/{date}?base={code}&symbols={comma-list}` →
//!   `{ "amount": 1.0, "base": "EUR", "date": "...", "rates": { ... } }`

use std::collections::{BTreeMap, BTreeSet};
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::error::GatewayError;
use super::RateGateway;
use crate::model::{CurrencyCatalog, CurrencyCode};

/// Public Frankfurter instance.
pub const DEFAULT_BASE_URL: &str = "https://api.frankfurter.app";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct FrankfurterGateway {
    client: Client,
    base_url: String,
}

impl FrankfurterGateway {
    pub fn new(base_url: impl AsRef<str>) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            base_url: base_url.as_ref().trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RatesResponse {
    base: String,
    date: String,
    rates: BTreeMap<CurrencyCode, f64>,
}

#[async_trait]
impl RateGateway for FrankfurterGateway {
    async fn list_currencies(&self) -> Result<CurrencyCatalog, GatewayError> {
        let url = format!("{}/currencies", self.base_url);
        tracing::debug!(%url, "fetching currency catalog");

        let resp = self.client.get(&url).send().await?;
        let resp = resp.error_for_status()?;
        let catalog: CurrencyCatalog = resp.json().await?;

        tracing::debug!(currencies = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    async fn historical_rates(
        &self,
        date: &str,
        base: &CurrencyCode,
        targets: &BTreeSet<CurrencyCode>,
    ) -> Result<BTreeMap<CurrencyCode, f64>, GatewayError> {
        let symbols = targets
            .iter()
            .map(CurrencyCode::as_str)
            .collect::<Vec<_>>()
            .join(",");
        let url = format!(
            "{}/{}?base={}&symbols={}",
            self.base_url, date, base, symbols
        );
        tracing::debug!(%url, "fetching historical rates");

        let resp = self.client.get(&url).send().await?;

        // The service answers 404 for dates with no published rates and
        // 400/422 for dates it cannot parse.
        if matches!(
            resp.status(),
            StatusCode::NOT_FOUND | StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY
        ) {
            return Err(GatewayError::InvalidDate {
                date: date.to_string(),
            });
        }

        let resp = resp.error_for_status()?;
        let body: RatesResponse = resp.json().await?;

        tracing::debug!(
            base = %body.base,
            date = %body.date,
            rates = body.rates.len(),
            "rates loaded"
        );
        Ok(body.rates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rates_response_decodes_wire_body() {
        let body = r#"{
            "amount": 1.0,
            "base": "EUR",
            "date": "2025-06-30",
            "rates": { "GBP": 0.73, "USD": 0.85 }
        }"#;
        let parsed: RatesResponse = serde_json::from_str(body).expect("valid body");
        assert_eq!(parsed.base, "EUR");
        assert_eq!(parsed.date, "2025-06-30");
        assert_eq!(parsed.rates[&CurrencyCode::new("USD")], 0.85);
        assert_eq!(parsed.rates[&CurrencyCode::new("GBP")], 0.73);
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let gateway = FrankfurterGateway::new("https://example.test/");
        assert_eq!(gateway.base_url, "https://example.test");
    }
}

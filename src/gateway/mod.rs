//! Rate gateway: the I/O boundary toward the remote rate-table service.
//!
//! The gateway carries no decision logic. Reducers depend on the
//! [`RateGateway`] trait; the concrete [`FrankfurterGateway`] is wired
//! in at construction time so tests can substitute a mock.

mod error;
mod frankfurter;

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;

pub use error::GatewayError;
pub use frankfurter::{FrankfurterGateway, DEFAULT_BASE_URL};

use crate::model::{CurrencyCatalog, CurrencyCode};

/// Remote rate-table service contract.
///
/// Rates are unit rates: "1 unit of base = rate units of target".
/// Scaling by an amount is a display-time concern, never the gateway's.
#[async_trait]
pub trait RateGateway: Send + Sync {
    /// List every currency the service supports, with display names.
    async fn list_currencies(&self) -> Result<CurrencyCatalog, GatewayError>;

    /// Fetch unit rates for `base` against `targets` on `date`
    /// ("YYYY-MM-DD").
    async fn historical_rates(
        &self,
        date: &str,
        base: &CurrencyCode,
        targets: &BTreeSet<CurrencyCode>,
    ) -> Result<BTreeMap<CurrencyCode, f64>, GatewayError>;
}

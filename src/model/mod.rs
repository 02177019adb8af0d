//! Core data model: currency codes, the currency catalog, rates, and
//! the selection → results handoff parameters.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Short uppercase currency identifier, e.g. "USD".
///
/// Treated as an opaque key into the catalog; no validation beyond
/// uppercasing on construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CurrencyCode(String);

impl CurrencyCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_ascii_uppercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CurrencyCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Mapping from currency code to human-readable display name.
///
/// Immutable snapshot per load; keys unique by construction.
pub type CurrencyCatalog = BTreeMap<CurrencyCode, String>;

/// One unit of the base currency equals `rate` units of `currency`.
#[derive(Debug, Clone, PartialEq)]
pub struct Rate {
    pub currency: CurrencyCode,
    pub rate: f64,
}

impl Rate {
    /// Display-time conversion of a raw amount string.
    ///
    /// Rates are unit rates; scaling by the amount happens here rather
    /// than in state, so edits to the amount never require a refetch.
    pub fn converted(&self, amount: &str) -> f64 {
        parse_amount(amount) * self.rate
    }
}

/// Parse raw user-entered amount text. Invalid text counts as 1.0.
pub fn parse_amount(text: &str) -> f64 {
    text.trim().parse().unwrap_or(1.0)
}

/// Current date in UTC, formatted as "YYYY-MM-DD".
pub fn today_utc() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Snapshot handed from the selection screen to the results screen.
///
/// Crosses the boundary exactly once, at results creation; the two
/// features never share mutable state.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultsParams {
    pub from_currency: CurrencyCode,
    pub to_currencies: BTreeSet<CurrencyCode>,
    pub amount: String,
    pub date: String,
}

impl Default for ResultsParams {
    fn default() -> Self {
        Self {
            from_currency: CurrencyCode::new("EUR"),
            to_currencies: BTreeSet::new(),
            amount: "1".to_string(),
            date: today_utc(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_code_uppercases() {
        assert_eq!(CurrencyCode::new("usd").as_str(), "USD");
        assert_eq!(CurrencyCode::new(" gbp ").as_str(), "GBP");
    }

    #[test]
    fn invalid_amount_counts_as_one() {
        assert_eq!(parse_amount("abc"), 1.0);
        assert_eq!(parse_amount(""), 1.0);
        assert_eq!(parse_amount("2.5"), 2.5);
    }

    #[test]
    fn converted_scales_unit_rate() {
        let rate = Rate {
            currency: CurrencyCode::new("USD"),
            rate: 0.85,
        };
        assert_eq!(rate.converted("100"), 85.0);
        assert_eq!(rate.converted("not a number"), 0.85);
    }

    #[test]
    fn today_is_iso_formatted() {
        let today = today_utc();
        assert_eq!(today.len(), 10);
        assert_eq!(today.as_bytes()[4], b'-');
        assert_eq!(today.as_bytes()[7], b'-');
    }
}

//! Error types for the rate gateway.
//!
//! Every gateway failure is classified into one of three kinds so the
//! reducers can record and surface it without caring about transport
//! details.

use thiserror::Error;

/// Errors that can occur while talking to the rate service.
#[derive(Debug, Error)]
pub enum GatewayError {
    /// Transport-level failure (connection, timeout, TLS).
    #[error("network error: {source}")]
    Network {
        #[source]
        source: reqwest::Error,
    },

    /// The service answered but the body could not be decoded.
    #[error("malformed response: {0}")]
    Decode(String),

    /// The service rejected the requested date (future date, or a date
    /// with no published rates such as weekends and holidays).
    #[error("no rates available for {date}")]
    InvalidDate { date: String },
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            GatewayError::Decode(err.to_string())
        } else {
            GatewayError::Network { source: err }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_date_names_the_date() {
        let err = GatewayError::InvalidDate {
            date: "2025-06-29".to_string(),
        };
        assert_eq!(err.to_string(), "no rates available for 2025-06-29");
    }

    #[test]
    fn decode_error_message() {
        let err = GatewayError::Decode("unexpected end of input".to_string());
        assert_eq!(err.to_string(), "malformed response: unexpected end of input");
    }
}

use std::{error::Error, fmt};

/// Failure taxonomy for one fetch cycle. Every run ends in exactly one of
/// these or a `Snapshot`; nothing here is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarketError {
    /// Transport never completed (DNS, refused connection, timeout).
    Network(String),
    /// The endpoint answered with a non-success HTTP status.
    Api(u16),
    /// Response violated the kline contract: empty result set, short
    /// records, or non-numeric price fields.
    MalformedData(String),
}

impl fmt::Display for MarketError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            MarketError::Network(msg) => write!(f, "Network failure: {}", msg),
            MarketError::Api(status) => write!(f, "API responded with status {}", status),
            MarketError::MalformedData(msg) => write!(f, "Malformed kline data: {}", msg),
        }
    }
}

impl Error for MarketError {}

impl MarketError {
    /// The one generic string shown to the user. The variant itself only
    /// matters for the log.
    pub fn user_message(&self) -> &'static str {
        match self {
            MarketError::Network(_) => "An error occurred while fetching data.",
            MarketError::Api(_) | MarketError::MalformedData(_) => "Failed to fetch chart data.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_failure_kind() {
        assert_eq!(
            MarketError::Network("connection refused".to_string()).to_string(),
            "Network failure: connection refused"
        );
        assert_eq!(
            MarketError::Api(500).to_string(),
            "API responded with status 500"
        );
        assert_eq!(
            MarketError::MalformedData("empty kline response".to_string()).to_string(),
            "Malformed kline data: empty kline response"
        );
    }

    #[test]
    fn user_message_is_generic_per_kind() {
        assert_eq!(
            MarketError::Network("dns".to_string()).user_message(),
            "An error occurred while fetching data."
        );
        assert_eq!(
            MarketError::Api(503).user_message(),
            "Failed to fetch chart data."
        );
        assert_eq!(
            MarketError::MalformedData("short record".to_string()).user_message(),
            "Failed to fetch chart data."
        );
    }

    #[test]
    fn variants_compare_and_clone() {
        let err = MarketError::Api(418);
        assert_eq!(err.clone(), err);
        assert_ne!(err, MarketError::Api(500));
    }
}

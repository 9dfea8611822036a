use thiserror::Error;

/// Configuration-related errors with structured variants.
///
/// These are the only errors allowed to abort the process; they are raised
/// before any connection attempt.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("unknown chain '{name}' (supported: {supported})")]
    UnknownChain { name: String, supported: String },

    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// A transport message that could not be parsed as JSON.
///
/// Recovered locally: the message is dropped and the connection stays open.
#[derive(Error, Debug)]
#[error("failed to decode message: {source}")]
pub struct DecodeError {
    /// The raw text as received from the transport.
    pub raw: String,
    #[source]
    pub source: serde_json::Error,
}

/// Failure raised by a single sink while handling one record.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("telegram request failed: {0}")]
    Telegram(String),

    #[error("timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("WebSocket error: {0}")]
    WebSocket(Box<tokio_tungstenite::tungstenite::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection error: {0}")]
    Connection(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<tokio_tungstenite::tungstenite::Error> for Error {
    fn from(err: tokio_tungstenite::tungstenite::Error) -> Self {
        Error::WebSocket(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_chain_lists_supported_names() {
        let err = ConfigError::UnknownChain {
            name: "dogechain".into(),
            supported: "ethereum, bnb".into(),
        };
        assert_eq!(
            err.to_string(),
            "unknown chain 'dogechain' (supported: ethereum, bnb)"
        );
    }

    #[test]
    fn config_error_converts_transparently() {
        let err: Error = ConfigError::MissingField { field: "url" }.into();
        assert_eq!(err.to_string(), "missing required field: url");
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn decode_error_keeps_raw_text() {
        let source = serde_json::from_str::<serde_json::Value>("nope").unwrap_err();
        let err = DecodeError {
            raw: "nope".into(),
            source,
        };
        assert_eq!(err.raw, "nope");
        assert!(err.to_string().starts_with("failed to decode message"));
    }

    #[test]
    fn runtime_errors_convert_from_their_sources() {
        let err: Error = tokio_tungstenite::tungstenite::Error::ConnectionClosed.into();
        assert!(matches!(err, Error::WebSocket(_)));

        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(matches!(err, Error::Io(_)));
    }
}

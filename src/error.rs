use std::fmt;
use std::string::FromUtf8Error;

use hmac::crypto_mac::InvalidKeyLength;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Invalid static input: endpoint, credentials or algorithm.
    ConfigError(String),
    EncodingError(String),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }

    pub(crate) fn encoding(msg: impl Into<String>) -> Self {
        Self::EncodingError(msg.into())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::ConfigError(msg) => format!("Configuration Error: {}", msg),
            Self::EncodingError(msg) => format!("Encoding Error: {}", msg),
        };
        write!(f, "{}", msg)
    }
}

impl std::error::Error for Error {}

impl From<InvalidKeyLength> for Error {
    fn from(e: InvalidKeyLength) -> Self {
        Self::ConfigError(e.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Self::ConfigError(format!("invalid endpoint: {}", e))
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Self::EncodingError(e.to_string())
    }
}

impl From<FromUtf8Error> for Error {
    fn from(e: FromUtf8Error) -> Self {
        Self::EncodingError(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::EncodingError(e.to_string())
    }
}

//! Error types for the homework bot.

use thiserror::Error;

/// The main error type for the homework bot.
#[derive(Error, Debug)]
pub enum Error {
    /// A required environment variable is missing or empty.
    #[error("required environment variable {0} is missing")]
    CredentialMissing(&'static str),

    /// The review API answered with something other than 200 OK.
    #[error("unexpected HTTP status {status} from {endpoint}")]
    Http { status: u16, endpoint: String },

    /// The review API body is not valid JSON.
    #[error("response body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    /// Transport failure (DNS, timeout, refused connection, TLS).
    #[error("connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// A response value has the wrong JSON type.
    #[error("unexpected response type: {0}")]
    TypeMismatch(String),

    /// A mandatory key is absent from the response.
    #[error("key \"{0}\" not found in response")]
    MissingField(&'static str),

    /// Homework status outside the known verdict set.
    #[error("unexpected homework status \"{0}\"")]
    UnexpectedStatus(String),

    /// The bot could not deliver a message.
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// Configuration errors
    #[error("configuration error: {0}")]
    Config(String),

    /// IO errors (config file access)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Anything outside the known taxonomy.
    #[error("unexpected failure: {0}")]
    Unexpected(String),
}

/// Alias for Result with our Error type.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a new type mismatch error.
    pub fn type_mismatch(msg: impl Into<String>) -> Self {
        Self::TypeMismatch(msg.into())
    }

    /// Create a new delivery error.
    pub fn delivery(msg: impl Into<String>) -> Self {
        Self::Delivery(msg.into())
    }

    /// Create a new config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new unexpected error.
    pub fn unexpected(msg: impl Into<String>) -> Self {
        Self::Unexpected(msg.into())
    }

    /// Errors raised while talking to the review API.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Self::Http { .. } | Self::Decode(_) | Self::Connection(_)
        )
    }

    /// Errors raised while checking the shape of an API response.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::TypeMismatch(_) | Self::MissingField(_) | Self::UnexpectedStatus(_)
        )
    }

    /// Check if the poll loop can carry on after this error.
    pub fn is_recoverable(&self) -> bool {
        self.is_transport() || self.is_validation()
    }
}

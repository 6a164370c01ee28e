use thiserror::Error;

/// Problems loading the process configuration. Always fatal.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {key}")]
    Missing { key: &'static str },

    #[error("invalid value for {key}: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("failed to load .env file: {0}")]
    DotEnv(#[from] dotenvy::Error),
}

/// Errors from the quote endpoint. Any of these aborts the run before a
/// single message is sent.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection refused, DNS, TLS, timeout, or the body could not be read.
    #[error("quote request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("quote endpoint returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected quote payload: {0}")]
    Decode(String),
}

/// Errors from a single provider "create message" call.
#[derive(Debug, Error)]
pub enum SendError {
    #[error("message request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("provider rejected message (HTTP {status}, code {code:?}): {message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },
}

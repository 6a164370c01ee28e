use std::fmt;
use std::time::Duration;

use log::{debug, warn};

use crate::error::ConfigError;

pub const DEFAULT_QUOTE_URL: &str = "https://zenquotes.io/api/random";
pub const DEFAULT_TWILIO_URL: &str = "https://api.twilio.com";
pub const DEFAULT_QUOTE_TIMEOUT: Duration = Duration::from_secs(20);

#[derive(Debug, Clone)]
pub struct QuoteConfig {
    pub url: String,
    pub timeout: Duration,
}

#[derive(Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    pub messaging_service_sid: String,
    pub api_url: String,
    /// `None` leaves the HTTP client's own default in place.
    pub timeout: Option<Duration>,
}

impl fmt::Debug for TwilioConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TwilioConfig")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("messaging_service_sid", &self.messaging_service_sid)
            .field("api_url", &self.api_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Everything a run needs, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub quote: QuoteConfig,
    pub twilio: TwilioConfig,
    pub recipients: Vec<String>,
}

/// Load `.env` from the working directory if there is one.
///
/// A missing file is fine since the variables may already be exported; a file
/// that exists but does not parse is not.
pub fn load_dotenv() -> Result<(), ConfigError> {
    match dotenvy::dotenv() {
        Ok(path) => {
            debug!("Loaded environment from {}", path.display());
            Ok(())
        }
        Err(err) if err.not_found() => Ok(()),
        Err(err) => Err(err.into()),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(ConfigError::Missing { key })
        };
        let optional = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let twilio = TwilioConfig {
            account_sid: required("TWILIO_ACCOUNT_SID")?,
            auth_token: required("TWILIO_AUTH_TOKEN")?,
            messaging_service_sid: required("TWILIO_MESSAGING_SERVICE_SID")?,
            api_url: optional("TWILIO_API_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_TWILIO_URL.to_string()),
            timeout: optional("TWILIO_TIMEOUT_SECS")
                .map(|v| parse_secs("TWILIO_TIMEOUT_SECS", &v))
                .transpose()?,
        };

        let quote = QuoteConfig {
            url: optional("QUOTE_API_URL").unwrap_or_else(|| DEFAULT_QUOTE_URL.to_string()),
            timeout: optional("QUOTE_TIMEOUT_SECS")
                .map(|v| parse_secs("QUOTE_TIMEOUT_SECS", &v))
                .transpose()?
                .unwrap_or(DEFAULT_QUOTE_TIMEOUT),
        };

        let recipients = parse_recipients(&required("RECIPIENTS")?);

        Ok(Self {
            quote,
            twilio,
            recipients,
        })
    }
}

/// Split a comma-separated recipient list.
///
/// Entries are trimmed but never dropped, so `k` entries always produce `k`
/// send attempts in the order given.
pub fn parse_recipients(raw: &str) -> Vec<String> {
    raw.split(',')
        .enumerate()
        .map(|(i, entry)| {
            let entry = entry.trim();
            if entry.is_empty() {
                warn!("Recipient #{} is blank; the send will likely fail", i + 1);
            }
            entry.to_string()
        })
        .collect()
}

fn parse_secs(key: &'static str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = raw.trim().parse().map_err(|_| ConfigError::Invalid {
        key,
        reason: format!("expected a whole number of seconds, got {:?}", raw),
    })?;
    if secs == 0 {
        return Err(ConfigError::Invalid {
            key,
            reason: "timeout must be greater than zero".to_string(),
        });
    }
    Ok(Duration::from_secs(secs))
}

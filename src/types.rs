use std::fmt;

use serde::Deserialize;

/// One quotation as served by the quote endpoint: `{"q": ..., "a": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuoteRecord {
    #[serde(rename = "q")]
    pub text: String,
    #[serde(rename = "a")]
    pub author: String,
}

/// Per-run tally of send attempts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DispatchOutcome {
    pub success_count: usize,
    pub failure_count: usize,
}

impl DispatchOutcome {
    pub fn attempted(&self) -> usize {
        self.success_count + self.failure_count
    }

    pub fn all_failed(&self) -> bool {
        self.failure_count > 0 && self.success_count == 0
    }
}

impl fmt::Display for DispatchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.failure_count > 0 {
            write!(
                f,
                "{} messages could not be sent. Please check your Twilio logs for more information",
                self.failure_count
            )
        } else {
            write!(f, "{} messages successfully sent", self.success_count)
        }
    }
}

/// Subset of the Twilio Message resource we care about.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageReceipt {
    pub sid: String,
    #[serde(default)]
    pub status: Option<String>,
}

/// Twilio REST error body.
#[derive(Debug, Deserialize)]
pub struct ProviderError {
    #[serde(default)]
    pub code: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}

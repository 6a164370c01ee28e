use anyhow::Context;
use log::info;

use crate::config::Config;
use crate::dispatch::dispatch;
use crate::quote::QuoteClient;
use crate::twilio::TwilioClient;
use crate::types::DispatchOutcome;

/// Fetch one quote and text it to every recipient.
///
/// Errors only for failures before dispatch starts; per-recipient failures
/// are folded into the returned outcome.
pub async fn run(config: &Config) -> anyhow::Result<DispatchOutcome> {
    let quotes = QuoteClient::new(&config.quote).context("Failed to build quote client")?;
    let twilio = TwilioClient::new(&config.twilio).context("Failed to build Twilio client")?;

    let quote = quotes.fetch().await.context("Failed to fetch quote")?;
    info!(
        "Sending quote by {} to {} recipient(s)",
        quote.author,
        config.recipients.len()
    );

    Ok(dispatch(&twilio, &quote.text, &config.recipients).await)
}

//! Message Dispatcher: one send per recipient, strictly in order, tallied.

use log::{error, info, warn};

use crate::error::SendError;
use crate::types::{DispatchOutcome, MessageReceipt};

/// Anything that can deliver a text message to a single address.
pub trait MessageSender {
    async fn send(&self, to: &str, body: &str) -> Result<MessageReceipt, SendError>;
}

/// Send `message` to every recipient, one at a time.
///
/// A failed send is logged and counted; it never stops the remaining sends
/// and never turns into an error for the caller.
pub async fn dispatch<S>(sender: &S, message: &str, recipients: &[String]) -> DispatchOutcome
where
    S: MessageSender,
{
    let mut outcome = DispatchOutcome::default();

    for recipient in recipients {
        match sender.send(recipient, message).await {
            Ok(receipt) => {
                info!(
                    "Sent message {} to {} ({})",
                    receipt.sid,
                    recipient,
                    receipt.status.as_deref().unwrap_or("unknown")
                );
                outcome.success_count += 1;
            }
            Err(e) => {
                error!("Failed to send to {:?}: {}", recipient, e);
                outcome.failure_count += 1;
            }
        }
    }

    if outcome.all_failed() {
        warn!("All {} sends failed", outcome.attempted());
    }

    outcome
}

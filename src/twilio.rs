//! Minimal client for Twilio's Programmable Messaging REST API.

use log::debug;

use crate::config::TwilioConfig;
use crate::dispatch::MessageSender;
use crate::error::SendError;
use crate::types::{MessageReceipt, ProviderError};

pub struct TwilioClient {
    client: reqwest::Client,
    api_url: String,
    account_sid: String,
    auth_token: String,
    messaging_service_sid: String,
}

impl TwilioClient {
    pub fn new(config: &TwilioConfig) -> Result<Self, SendError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            client: builder.build()?,
            api_url: config.api_url.clone(),
            account_sid: config.account_sid.clone(),
            auth_token: config.auth_token.clone(),
            messaging_service_sid: config.messaging_service_sid.clone(),
        })
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.api_url, self.account_sid
        )
    }

    /// `POST .../Messages.json` for one recipient, sent through the
    /// configured messaging service.
    pub async fn create_message(&self, to: &str, body: &str) -> Result<MessageReceipt, SendError> {
        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&[
                ("To", to),
                ("MessagingServiceSid", self.messaging_service_sid.as_str()),
                ("Body", body),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            debug!("Twilio error body: {}", text);
            let parsed = serde_json::from_str::<ProviderError>(&text).ok();
            return Err(SendError::Api {
                status: status.as_u16(),
                code: parsed.as_ref().and_then(|p| p.code),
                message: parsed.and_then(|p| p.message).unwrap_or(text),
            });
        }

        Ok(response.json::<MessageReceipt>().await?)
    }
}

impl MessageSender for TwilioClient {
    async fn send(&self, to: &str, body: &str) -> Result<MessageReceipt, SendError> {
        self.create_message(to, body).await
    }
}

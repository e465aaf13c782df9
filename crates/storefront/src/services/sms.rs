//! SMS gateway client for password-reset codes.
//!
//! The gateway accepts a JSON message submission authenticated with a bearer
//! token and answers with a 2xx status on acceptance.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use secrecy::ExposeSecret;
use serde::Serialize;
use thiserror::Error;

use voltcart_core::MobileNumber;

use crate::config::SmsConfig;

/// Errors that can occur when talking to the SMS gateway.
#[derive(Debug, Error)]
pub enum SmsError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Gateway rejected the message.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// The configured key cannot be used as a header value.
    #[error("invalid API key format: {0}")]
    InvalidKey(String),
}

#[derive(Debug, Serialize)]
struct OutgoingMessage<'a> {
    from: &'a str,
    to: &'a str,
    text: String,
}

/// Client for the configured SMS gateway.
#[derive(Clone)]
pub struct SmsClient {
    client: reqwest::Client,
    endpoint: String,
    sender_id: String,
}

impl SmsClient {
    /// Create a new SMS gateway client.
    ///
    /// # Errors
    ///
    /// Returns error if the key is not a valid header value or the HTTP
    /// client fails to build.
    pub fn new(config: &SmsConfig) -> Result<Self, SmsError> {
        let mut headers = HeaderMap::new();

        let auth_value = format!("Bearer {}", config.api_key.expose_secret());
        let mut auth_header =
            HeaderValue::from_str(&auth_value).map_err(|e| SmsError::InvalidKey(e.to_string()))?;
        auth_header.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth_header);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            sender_id: config.sender_id.clone(),
        })
    }

    /// Send a password-reset code.
    ///
    /// # Errors
    ///
    /// Returns error if the request fails or the gateway rejects the message.
    #[tracing::instrument(skip(self, code), fields(to = %to.masked()))]
    pub async fn send_reset_code(
        &self,
        to: &MobileNumber,
        code: &str,
        ttl_minutes: i64,
    ) -> Result<(), SmsError> {
        let body = OutgoingMessage {
            from: &self.sender_id,
            to: to.as_str(),
            text: reset_message(code, ttl_minutes),
        };

        let response = self.client.post(&self.endpoint).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(SmsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        tracing::info!("Reset code delivered to gateway");
        Ok(())
    }
}

fn reset_message(code: &str, ttl_minutes: i64) -> String {
    format!(
        "Your VoltCart verification code is {code}. It expires in {ttl_minutes} minutes. Do not share it with anyone."
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;

    #[test]
    fn test_reset_message() {
        let text = reset_message("042517", 10);
        assert!(text.contains("042517"));
        assert!(text.contains("10 minutes"));
    }

    #[test]
    fn test_new_rejects_header_breaking_key() {
        let config = SmsConfig {
            endpoint: "https://sms.gateway.test/v1/messages".to_string(),
            api_key: SecretString::from("line\nbreak"),
            sender_id: "VOLTCART".to_string(),
        };
        assert!(matches!(
            SmsClient::new(&config),
            Err(SmsError::InvalidKey(_))
        ));
    }

    #[test]
    fn test_message_body_shape() {
        let to = MobileNumber::parse("+977 9841-234567").unwrap();
        let body = OutgoingMessage {
            from: "VOLTCART",
            to: to.as_str(),
            text: reset_message("123456", 10),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["from"], "VOLTCART");
        assert_eq!(json["to"], to.as_str());
    }
}

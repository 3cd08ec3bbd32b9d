//! Contact — relays contact-form submissions to Web3Forms, plus the
//! newsletter signup stub.
//!
//! Relay failures stay local to the form: they map to `RELAY_ERROR` and never
//! affect the rest of the application.

pub mod handlers;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::AppError;

const WEB3FORMS_URL: &str = "https://api.web3forms.com/submit";

/// Subject line attached to every relayed message.
const CONTACT_SUBJECT: &str = "New Contact Message from PathFinder AI";

/// Web3Forms access key. This is a public client-side key, not a secret —
/// it only routes submissions to the configured inbox.
const WEB3FORMS_ACCESS_KEY: &str = "2220e4b9-8675-4619-a03c-7cbaf763acb6";

#[derive(Debug, Serialize)]
struct RelayPayload<'a> {
    access_key: &'static str,
    subject: &'static str,
    name: &'a str,
    email: &'a str,
    message: &'a str,
}

/// Web3Forms answer shape: `{success, message?}`.
#[derive(Debug, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
}

/// One-shot relay to the form endpoint. A single shared reqwest client,
/// no retries.
#[derive(Clone)]
pub struct ContactRelay {
    client: Client,
}

impl ContactRelay {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .expect("Failed to build HTTP client"),
        }
    }

    /// Sends one contact message. Returns the relay's confirmation message.
    pub async fn send(&self, name: &str, email: &str, message: &str) -> Result<String, AppError> {
        let payload = RelayPayload {
            access_key: WEB3FORMS_ACCESS_KEY,
            subject: CONTACT_SUBJECT,
            name,
            email,
            message,
        };

        let response = self
            .client
            .post(WEB3FORMS_URL)
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Relay(format!("contact relay request failed: {e}")))?;

        let relay: RelayResponse = response
            .json()
            .await
            .map_err(|e| AppError::Relay(format!("contact relay returned unreadable body: {e}")))?;

        if !relay.success {
            let reason = relay
                .message
                .unwrap_or_else(|| "Something went wrong. Please try again.".to_string());
            warn!("Contact relay rejected submission: {reason}");
            return Err(AppError::Relay(reason));
        }

        Ok(relay
            .message
            .unwrap_or_else(|| "Message sent successfully! We'll get back to you soon.".to_string()))
    }
}

impl Default for ContactRelay {
    fn default() -> Self {
        Self::new()
    }
}

/// Minimal email shape check for the newsletter stub: something before and
/// after a single '@', with a dot in the domain.
pub fn is_plausible_email(email: &str) -> bool {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relay_response_parses_success_without_message() {
        let relay: RelayResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        assert!(relay.success);
        assert!(relay.message.is_none());
    }

    #[test]
    fn test_relay_response_parses_failure_message() {
        let relay: RelayResponse =
            serde_json::from_str(r#"{"success": false, "message": "Invalid access key"}"#).unwrap();
        assert!(!relay.success);
        assert_eq!(relay.message.as_deref(), Some("Invalid access key"));
    }

    #[test]
    fn test_relay_payload_carries_fixed_subject_and_key() {
        let payload = RelayPayload {
            access_key: WEB3FORMS_ACCESS_KEY,
            subject: CONTACT_SUBJECT,
            name: "Asha",
            email: "asha@example.com",
            message: "Hi",
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["subject"], CONTACT_SUBJECT);
        assert_eq!(value["access_key"], WEB3FORMS_ACCESS_KEY);
    }

    #[test]
    fn test_is_plausible_email() {
        assert!(is_plausible_email("user@example.com"));
        assert!(is_plausible_email("  user@sub.example.org "));
        assert!(!is_plausible_email("userexample.com"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email("user@"));
        assert!(!is_plausible_email("user@nodot"));
        assert!(!is_plausible_email(""));
    }
}

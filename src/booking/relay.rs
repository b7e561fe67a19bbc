//! Forwarding inquiries to the transactional e-mail relay.

use async_trait::async_trait;
use serde_json::json;

use crate::config::EmailRelaySettings;

use super::form::Inquiry;

#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    #[error("e-mail relay is not configured")]
    NotConfigured,

    #[error("e-mail relay request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("e-mail relay rejected the message with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers a validated inquiry. One attempt, no retry.
#[async_trait]
pub trait EmailRelay: Send + Sync {
    async fn send(&self, inquiry: &Inquiry) -> Result<(), RelayError>;
}

/// EmailJS-style REST relay
pub struct HttpEmailRelay {
    client: reqwest::Client,
    settings: EmailRelaySettings,
}

impl HttpEmailRelay {
    pub fn new(client: reqwest::Client, settings: EmailRelaySettings) -> Self {
        Self { client, settings }
    }

    fn payload(&self, inquiry: &Inquiry) -> Option<serde_json::Value> {
        let service_id = self.settings.service_id.as_deref()?;
        let template_id = self.settings.template_id.as_deref()?;
        let public_key = self.settings.public_key.as_deref()?;
        let date = |d: Option<chrono::NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();

        Some(json!({
            "service_id": service_id,
            "template_id": template_id,
            "user_id": public_key,
            "template_params": {
                "reference": inquiry.reference.to_string(),
                "from_name": inquiry.name,
                "reply_to": inquiry.email,
                "check_in": date(inquiry.check_in),
                "check_out": date(inquiry.check_out),
                "nights": inquiry.nights(),
                "estimated_total": inquiry.estimated_total.map(|t| t.normalize().to_string()),
                "message": inquiry.message,
            }
        }))
    }
}

#[async_trait]
impl EmailRelay for HttpEmailRelay {
    async fn send(&self, inquiry: &Inquiry) -> Result<(), RelayError> {
        let payload = self.payload(inquiry).ok_or(RelayError::NotConfigured)?;

        let response = self
            .client
            .post(&self.settings.url)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RelayError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    fn inquiry() -> Inquiry {
        Inquiry {
            reference: Uuid::nil(),
            name: "Giulia Rossi".to_string(),
            email: "giulia@example.com".to_string(),
            check_in: NaiveDate::from_ymd_opt(2025, 7, 3),
            check_out: NaiveDate::from_ymd_opt(2025, 7, 7),
            message: "Late arrival".to_string(),
            estimated_total: Some(dec!(615)),
        }
    }

    fn settings(configured: bool) -> EmailRelaySettings {
        EmailRelaySettings {
            url: "http://127.0.0.1:9/send".to_string(),
            service_id: configured.then(|| "svc".to_string()),
            template_id: Some("tpl".to_string()),
            public_key: Some("key".to_string()),
        }
    }

    #[test]
    fn test_payload_shape() {
        let relay = HttpEmailRelay::new(reqwest::Client::new(), settings(true));
        let payload = relay.payload(&inquiry()).unwrap();
        assert_eq!(payload["service_id"], "svc");
        assert_eq!(payload["user_id"], "key");
        assert_eq!(payload["template_params"]["check_in"], "2025-07-03");
        assert_eq!(payload["template_params"]["nights"], 4);
        assert_eq!(payload["template_params"]["estimated_total"], "615");
        assert_eq!(payload["template_params"]["reply_to"], "giulia@example.com");
    }

    #[tokio::test]
    async fn test_unconfigured_relay_fails_without_request() {
        let relay = HttpEmailRelay::new(reqwest::Client::new(), settings(false));
        assert!(matches!(
            relay.send(&inquiry()).await,
            Err(RelayError::NotConfigured)
        ));
    }
}

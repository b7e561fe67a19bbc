//! Booking inquiries: form validation and relay to the owner's inbox.
//!
//! No booking is made here; an inquiry is an e-mail the owner answers by hand.

pub mod form;
pub mod relay;

use tracing::{info, warn};

use crate::pricing::PricingConfig;

pub use form::{Inquiry, InquiryForm};
pub use relay::{EmailRelay, HttpEmailRelay, RelayError};

/// Result of a form submission, rendered as an inline error or a notice.
#[derive(Debug)]
pub enum InquiryOutcome {
    /// Rejected before anything was sent
    Invalid(Vec<String>),
    Sent(Inquiry),
    /// The relay failed; the visitor has to resubmit
    Failed(RelayError),
}

/// Validate the form and, only if it is valid, relay it once.
pub async fn submit_inquiry(
    form: &InquiryForm,
    relay: &dyn EmailRelay,
    pricing: &PricingConfig,
) -> InquiryOutcome {
    let inquiry = match form.into_inquiry(pricing) {
        Ok(inquiry) => inquiry,
        Err(errors) => return InquiryOutcome::Invalid(errors),
    };

    match relay.send(&inquiry).await {
        Ok(()) => {
            info!(
                "Booking inquiry {} relayed (check-in {:?}, check-out {:?})",
                inquiry.reference, inquiry.check_in, inquiry.check_out
            );
            InquiryOutcome::Sent(inquiry)
        }
        Err(e) => {
            warn!("Booking inquiry {} not delivered: {}", inquiry.reference, e);
            InquiryOutcome::Failed(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct RecordingRelay {
        calls: AtomicUsize,
        fail: bool,
    }

    impl RecordingRelay {
        fn new(fail: bool) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail,
            }
        }
    }

    #[async_trait]
    impl EmailRelay for RecordingRelay {
        async fn send(&self, _inquiry: &Inquiry) -> Result<(), RelayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(RelayError::Rejected {
                    status: 500,
                    body: "down".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    fn form(check_in: &str, check_out: &str) -> InquiryForm {
        InquiryForm {
            name: "Marco".to_string(),
            email: "marco@example.com".to_string(),
            check_in: check_in.to_string(),
            check_out: check_out.to_string(),
            message: String::new(),
        }
    }

    #[tokio::test]
    async fn test_invalid_dates_never_reach_the_relay() {
        let relay = RecordingRelay::new(false);
        let outcome = submit_inquiry(
            &form("2025-07-10", "2025-07-10"),
            &relay,
            &PricingConfig::default(),
        )
        .await;

        assert!(matches!(outcome, InquiryOutcome::Invalid(_)));
        assert_eq!(relay.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_valid_inquiry_is_sent_once() {
        let relay = RecordingRelay::new(false);
        let outcome = submit_inquiry(
            &form("2025-07-10", "2025-07-12"),
            &relay,
            &PricingConfig::default(),
        )
        .await;

        assert!(matches!(outcome, InquiryOutcome::Sent(_)));
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_relay_failure_is_reported_without_retry() {
        let relay = RecordingRelay::new(true);
        let outcome = submit_inquiry(&form("", ""), &relay, &PricingConfig::default()).await;

        assert!(matches!(outcome, InquiryOutcome::Failed(_)));
        assert_eq!(relay.calls.load(Ordering::SeqCst), 1);
    }
}

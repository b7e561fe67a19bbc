//! Booking-inquiry form and its validation.

use std::borrow::Cow;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::pricing::{price_range, PricingConfig, MAX_STAY_NIGHTS};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// The form as posted. Dates are raw `YYYY-MM-DD` strings; empty means unset.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[validate(schema(function = "validate_stay_dates", skip_on_field_errors = false))]
pub struct InquiryForm {
    #[validate(
        custom(function = "non_blank"),
        length(max = 200, message = "Your name is too long")
    )]
    #[serde(default)]
    pub name: String,

    #[validate(email(message = "Please enter a valid email address"))]
    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub check_in: String,

    #[serde(default)]
    pub check_out: String,

    #[validate(length(max = 2000, message = "Your message is too long"))]
    #[serde(default)]
    pub message: String,
}

fn parse_date(raw: &str) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| {
            ValidationError::new("invalid_date").with_message(Cow::Borrowed("Please enter valid dates"))
        })
}

fn non_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank")
            .with_message(Cow::Borrowed("Please enter your name")));
    }
    Ok(())
}

/// Check-out must be strictly after check-in, and the stay at most
/// [`MAX_STAY_NIGHTS`] long, when both are given.
fn validate_stay_dates(form: &InquiryForm) -> Result<(), ValidationError> {
    let check_in = parse_date(&form.check_in)?;
    let check_out = parse_date(&form.check_out)?;
    match (check_in, check_out) {
        (Some(check_in), Some(check_out)) if check_out <= check_in => Err(ValidationError::new(
            "check_out_before_check_in",
        )
        .with_message(Cow::Borrowed("Check-out date must be after check-in date"))),
        (Some(check_in), Some(check_out)) if (check_out - check_in).num_days() > MAX_STAY_NIGHTS => {
            Err(ValidationError::new("stay_too_long").with_message(Cow::Owned(format!(
                "Stays are limited to {} nights",
                MAX_STAY_NIGHTS
            ))))
        }
        _ => Ok(()),
    }
}

/// A validated inquiry, ready to be relayed.
#[derive(Debug, Clone, Serialize)]
pub struct Inquiry {
    pub reference: Uuid,
    pub name: String,
    pub email: String,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub message: String,
    /// Sum of nightly rates when both dates are given
    pub estimated_total: Option<Decimal>,
}

impl Inquiry {
    pub fn nights(&self) -> Option<i64> {
        match (self.check_in, self.check_out) {
            (Some(check_in), Some(check_out)) => Some((check_out - check_in).num_days()),
            _ => None,
        }
    }
}

impl InquiryForm {
    fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            check_in: self.check_in.trim().to_string(),
            check_out: self.check_out.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Validate and convert into an [`Inquiry`], or the messages to show inline.
    pub fn into_inquiry(&self, pricing: &PricingConfig) -> Result<Inquiry, Vec<String>> {
        let form = self.trimmed();
        form.validate().map_err(|errors| error_messages(&errors))?;

        let check_in = parse_date(&form.check_in).map_err(|e| vec![message_of(&e)])?;
        let check_out = parse_date(&form.check_out).map_err(|e| vec![message_of(&e)])?;
        let estimated_total = match (check_in, check_out) {
            (Some(start), Some(end)) => Some(price_range(start, end, pricing).total),
            _ => None,
        };

        Ok(Inquiry {
            reference: Uuid::new_v4(),
            name: form.name,
            email: form.email,
            check_in,
            check_out,
            message: form.message,
            estimated_total,
        })
    }
}

fn message_of(error: &ValidationError) -> String {
    error
        .message
        .as_ref()
        .map(|m| m.to_string())
        .unwrap_or_else(|| error.code.to_string())
}

/// Flatten validation errors into display messages, fields in form order.
fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let by_field = errors.field_errors();
    ["name", "email", "message", "__all__"]
        .iter()
        .filter_map(|field| by_field.get(*field))
        .flat_map(|errs| errs.iter().map(message_of))
        .collect()
}

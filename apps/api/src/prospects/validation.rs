//! Response validator: turns the generator's raw text into typed `Prospect`s.
//!
//! Policy: the whole batch fails on the first invalid record. Source order is kept.
//! No deduplication happens here; see `dedup` for the opt-in pass.

use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::prospects::models::{Contact, Prospect};
use crate::prospects::prompts::{MAX_PROSPECTS, MIN_PROSPECTS};

#[derive(Debug, Error)]
pub enum ResponseFormatError {
    #[error("response is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("response must be a JSON array of prospects, got {0}")]
    NotAnArray(&'static str),

    #[error("prospect #{index} is invalid: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

impl ResponseFormatError {
    /// True for well-formed JSON that does not match the prospect schema.
    pub fn is_schema_violation(&self) -> bool {
        !matches!(self, ResponseFormatError::MalformedJson(_))
    }
}

/// Parses and validates a raw generator response.
pub fn parse_prospects(text: &str) -> Result<Vec<Prospect>, ResponseFormatError> {
    let payload: Value = serde_json::from_str(text).map_err(ResponseFormatError::MalformedJson)?;
    validate_payload(payload)
}

/// Validates already-decoded structured data claiming to be a prospect array.
pub fn validate_payload(payload: Value) -> Result<Vec<Prospect>, ResponseFormatError> {
    let records = match payload {
        Value::Array(records) => records,
        other => return Err(ResponseFormatError::NotAnArray(kind_of(&other))),
    };

    if !(MIN_PROSPECTS..=MAX_PROSPECTS).contains(&records.len()) {
        warn!(
            "Generator returned {} prospects (requested {}-{})",
            records.len(),
            MIN_PROSPECTS,
            MAX_PROSPECTS
        );
    }

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            validate_record(record)
                .map_err(|reason| ResponseFormatError::InvalidRecord { index, reason })
        })
        .collect()
}

fn validate_record(record: Value) -> Result<Prospect, String> {
    let prospect: Prospect = serde_json::from_value(record).map_err(|e| e.to_string())?;

    require_text("company_name", &prospect.company_name)?;
    require_text("domain", &prospect.domain)?;

    if !prospect.revenue.is_finite() || prospect.revenue < 0.0 {
        return Err(format!(
            "revenue must be a non-negative number, got {}",
            prospect.revenue
        ));
    }

    if !prospect.confidence.is_finite() || !(0.0..=1.0).contains(&prospect.confidence) {
        return Err(format!(
            "confidence must be within [0, 1], got {}",
            prospect.confidence
        ));
    }

    if prospect.contacts.is_empty() {
        return Err("contacts must contain at least one contact".to_string());
    }
    for (i, contact) in prospect.contacts.iter().enumerate() {
        validate_contact(contact).map_err(|reason| format!("contact #{i}: {reason}"))?;
    }

    if prospect.source.is_empty() {
        return Err("source must list at least one data source".to_string());
    }

    Ok(prospect)
}

fn validate_contact(contact: &Contact) -> Result<(), String> {
    require_text("name", &contact.name)?;
    require_text("title", &contact.title)?;
    require_text("email", &contact.email)?;
    require_text("linkedin", &contact.linkedin)
}

fn require_text(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err(format!("{field} must not be empty"))
    } else {
        Ok(())
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

//! Shape validation for incoming card records.
//!
//! The engine only runs on a batch where every record passed. Problems are
//! collected across the whole batch and returned together.

use serde::Serialize;

use crate::analytics::dates::parse_open_date;
use crate::models::credit_card::{CardStatus, CreditCardRecord, RawCardRecord};

/// A single problem with a single record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    /// Position of the record in the submitted batch
    pub index: usize,
    pub field: &'static str,
    pub message: String,
}

/// Every problem found in a batch of records.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid card record field(s)", .issues.len())]
pub struct ValidationError {
    pub issues: Vec<ValidationIssue>,
}

/// Validate a batch of raw records.
///
/// Returns the typed records in input order, or every issue found.
pub fn validate_records(raw: &[RawCardRecord]) -> Result<Vec<CreditCardRecord>, ValidationError> {
    let mut issues = Vec::new();
    let mut records = Vec::with_capacity(raw.len());

    for (index, record) in raw.iter().enumerate() {
        if let Some(valid) = validate_record(index, record, &mut issues) {
            records.push(valid);
        }
    }

    if issues.is_empty() {
        Ok(records)
    } else {
        Err(ValidationError { issues })
    }
}

fn validate_record(
    index: usize,
    raw: &RawCardRecord,
    issues: &mut Vec<ValidationIssue>,
) -> Option<CreditCardRecord> {
    let before = issues.len();
    let mut issue = |field: &'static str, message: &str| {
        issues.push(ValidationIssue {
            index,
            field,
            message: message.to_string(),
        })
    };

    let id = non_blank(raw.id.as_deref());
    if id.is_none() {
        issue("id", "id is required");
    }

    let card_name = non_blank(raw.card_name.as_deref());
    if card_name.is_none() {
        issue("card_name", "card_name must be a non-empty string");
    }

    // Issuer is a free-form grouping key, but it still has to be present
    if raw.issuer.is_none() {
        issue("issuer", "issuer is required");
    }

    let status = match raw.status.as_deref() {
        None => {
            issue("status", "status is required");
            None
        }
        Some(text) => {
            let parsed = CardStatus::parse(text);
            if parsed.is_none() {
                issue("status", "status must be Active or Closed");
            }
            parsed
        }
    };

    if raw.credit_limit_cents.is_some_and(|limit| limit < 0) {
        issue("credit_limit_cents", "credit_limit_cents must not be negative");
    }
    if raw.annual_fee_cents.is_some_and(|fee| fee < 0) {
        issue("annual_fee_cents", "annual_fee_cents must not be negative");
    }

    if issues.len() != before {
        return None;
    }

    Some(CreditCardRecord {
        id: id?.to_string(),
        card_name: card_name?.to_string(),
        issuer: raw.issuer.clone()?,
        account_number_suffix: raw
            .account_number
            .clone()
            .unwrap_or_else(|| "****".to_string()),
        status: status?,
        open_date: parse_open_date(raw.open_date.as_deref()),
        credit_limit_cents: raw.credit_limit_cents,
        current_balance_cents: raw.current_balance_cents,
        annual_fee_cents: raw.annual_fee_cents,
    })
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !text.trim().is_empty())
}

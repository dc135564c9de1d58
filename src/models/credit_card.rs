//! Credit card data models and API request/response types.
//!
//! This module defines:
//! - `CreditCardRow`: Database entity representing a stored card
//! - `RawCardRecord`: Loosely typed record as produced by the extractor
//! - `CreditCardRecord`: Validated record consumed by the analytics engine
//! - `CreateCreditCardRequest`: Request body for storing extracted cards
//! - `CreditCardResponse`: Response body returned to clients
//!
//! # Amounts
//!
//! Every currency amount is stored as `i64` cents, the same as in the
//! database. `$5,000.00` is `500000`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account status reported by the credit bureau.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardStatus {
    Active,
    Closed,
}

impl CardStatus {
    /// Parse a status string, ignoring case and surrounding whitespace.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "active" => Some(CardStatus::Active),
            "closed" => Some(CardStatus::Closed),
            _ => None,
        }
    }
}

/// Represents a credit card record from the database.
///
/// # Database Table
///
/// Maps to the `credit_cards` table. Each card:
/// - Belongs to exactly one user; queries filter on `user_id`, which is not
///   selected back
/// - Keeps `open_date` and `status` as the text the extractor produced
/// - Stores optional amounts in cents
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct CreditCardRow {
    pub id: Uuid,
    pub card_name: String,
    pub issuer: String,

    /// Last digits of the account number, or `****` when unknown
    pub account_number: String,

    /// Open date as extracted (`2020-03-15`, `03/2020`, `Unknown`, ...)
    pub open_date: String,

    /// Status as extracted, expected to be `Active` or `Closed`
    pub status: String,

    pub credit_limit_cents: Option<i64>,
    pub current_balance_cents: Option<i64>,
    pub annual_fee_cents: Option<i64>,

    pub account_type: String,
    pub created_at: DateTime<Utc>,
}

/// A card record before validation.
///
/// This is the shape accepted by the stateless analyze endpoint and the
/// shape stored rows are turned into before they reach the engine. Every
/// field is optional so that a missing field can be reported instead of
/// failing deserialization of the whole batch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCardRecord {
    pub id: Option<String>,
    pub card_name: Option<String>,
    pub issuer: Option<String>,
    pub account_number: Option<String>,
    pub status: Option<String>,
    pub open_date: Option<String>,
    pub credit_limit_cents: Option<i64>,
    pub current_balance_cents: Option<i64>,
    pub annual_fee_cents: Option<i64>,
}

impl From<CreditCardRow> for RawCardRecord {
    fn from(row: CreditCardRow) -> Self {
        Self {
            id: Some(row.id.to_string()),
            card_name: Some(row.card_name),
            issuer: Some(row.issuer),
            account_number: Some(row.account_number),
            status: Some(row.status),
            open_date: Some(row.open_date),
            credit_limit_cents: row.credit_limit_cents,
            current_balance_cents: row.current_balance_cents,
            annual_fee_cents: row.annual_fee_cents,
        }
    }
}

/// A validated credit card, the only input type of the analytics engine.
///
/// `open_date` is `None` when the extracted date was unknown or unreadable.
/// `current_balance_cents` may be negative for a credit balance.
#[derive(Debug, Clone, PartialEq)]
pub struct CreditCardRecord {
    pub id: String,
    pub card_name: String,
    pub issuer: String,
    pub account_number_suffix: String,
    pub status: CardStatus,
    pub open_date: Option<NaiveDate>,
    pub credit_limit_cents: Option<i64>,
    pub current_balance_cents: Option<i64>,
    pub annual_fee_cents: Option<i64>,
}

impl CreditCardRecord {
    pub fn is_active(&self) -> bool {
        self.status == CardStatus::Active
    }
}

/// Request body for storing one extracted card.
///
/// The endpoint accepts an array of these, which is what the document
/// extractor emits for a single credit report.
///
/// # JSON Example
///
/// ```json
/// {
///   "card_name": "Chase Freedom Unlimited",
///   "issuer": "Chase",
///   "account_number": "1234",
///   "open_date": "2020-03-15",
///   "status": "Active",
///   "credit_limit_cents": 500000,
///   "current_balance_cents": 125000,
///   "annual_fee_cents": 0
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCreditCardRequest {
    pub card_name: Option<String>,
    pub issuer: Option<String>,

    #[serde(default = "default_account_number")]
    pub account_number: String,

    #[serde(default = "default_open_date")]
    pub open_date: String,

    pub status: Option<String>,
    pub credit_limit_cents: Option<i64>,
    pub current_balance_cents: Option<i64>,
    pub annual_fee_cents: Option<i64>,

    #[serde(default = "default_account_type")]
    pub account_type: String,
}

fn default_account_number() -> String {
    "****".to_string()
}

fn default_open_date() -> String {
    "Unknown".to_string()
}

fn default_account_type() -> String {
    "Credit Card".to_string()
}

impl CreateCreditCardRequest {
    /// View this request as a raw record carrying the id it will be stored under.
    pub fn to_raw(&self, id: Uuid) -> RawCardRecord {
        RawCardRecord {
            id: Some(id.to_string()),
            card_name: self.card_name.clone(),
            issuer: self.issuer.clone(),
            account_number: Some(self.account_number.clone()),
            status: self.status.clone(),
            open_date: Some(self.open_date.clone()),
            credit_limit_cents: self.credit_limit_cents,
            current_balance_cents: self.current_balance_cents,
            annual_fee_cents: self.annual_fee_cents,
        }
    }
}

/// Response body for credit card endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "id": "550e8400-e29b-41d4-a716-446655440000",
///   "card_name": "Chase Freedom Unlimited",
///   "issuer": "Chase",
///   "account_number": "1234",
///   "open_date": "2020-03-15",
///   "status": "Active",
///   "credit_limit_cents": 500000,
///   "current_balance_cents": 125000,
///   "annual_fee_cents": 0,
///   "account_type": "Credit Card",
///   "created_at": "2025-12-20T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct CreditCardResponse {
    pub id: Uuid,
    pub card_name: String,
    pub issuer: String,
    pub account_number: String,
    pub open_date: String,
    pub status: String,
    pub credit_limit_cents: Option<i64>,
    pub current_balance_cents: Option<i64>,
    pub annual_fee_cents: Option<i64>,
    pub account_type: String,
    pub created_at: DateTime<Utc>,
}

impl From<CreditCardRow> for CreditCardResponse {
    fn from(row: CreditCardRow) -> Self {
        Self {
            id: row.id,
            card_name: row.card_name,
            issuer: row.issuer,
            account_number: row.account_number,
            open_date: row.open_date,
            status: row.status,
            credit_limit_cents: row.credit_limit_cents,
            current_balance_cents: row.current_balance_cents,
            annual_fee_cents: row.annual_fee_cents,
            account_type: row.account_type,
            created_at: row.created_at,
        }
    }
}

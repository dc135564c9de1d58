//! Portfolio report returned by the analytics engine.
//!
//! The report is a value object. It is rebuilt from the current records on
//! every request and never stored. Field names are the external contract the
//! dashboard reads, so renaming any of them is a breaking change.
//!
//! All amounts are cents. Percentages are whole percentage points.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consolidated analysis of one user's credit card portfolio.
///
/// # JSON Example
///
/// ```json
/// {
///   "total_cards": 2,
///   "active_cards": 2,
///   "closed_cards": 0,
///   "total_credit_limit": 1500000,
///   "total_current_balance": 400000,
///   "credit_utilization": 27,
///   "five_24_status": { "status": "Eligible", "is_eligible": true, ... },
///   "total_annual_fees": 9500,
///   "portfolio_analysis": { "annual_fees": { ... }, ... },
///   "age_analysis": { "oldest_card_date": "2021-06-01", ... },
///   "issuer_breakdown": { "Chase": 1, "Citi": 1 },
///   "top_utilization_cards": [ ... ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub total_cards: usize,
    pub active_cards: usize,
    pub closed_cards: usize,

    /// Sum of known credit limits
    pub total_credit_limit: i64,

    /// Sum of known balances
    pub total_current_balance: i64,

    /// Portfolio-wide utilization, 0 when there is no credit limit
    pub credit_utilization: i64,

    pub five_24_status: Five24Status,

    pub total_annual_fees: i64,

    pub portfolio_analysis: PortfolioAnalysis,

    pub age_analysis: AgeAnalysis,

    /// Issuer name to number of cards, matched case-sensitively
    pub issuer_breakdown: BTreeMap<String, usize>,

    /// Highest-utilization cards above the alert threshold
    pub top_utilization_cards: Vec<UtilizationEntry>,
}

/// Outcome of the 5/24 rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligibilityStatus {
    Eligible,
    #[serde(rename = "Not Eligible")]
    NotEligible,
}

/// 5/24 application eligibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Five24Status {
    pub status: EligibilityStatus,
    pub is_eligible: bool,
    pub cards_in_24_months: usize,
    pub remaining_slots: usize,
    pub recommendation: String,

    /// Whole months until enough cards leave the window, only when not eligible
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub months_until_eligible: Option<u32>,

    /// Cards inside the window, newest first
    pub recent_cards: Vec<RecentCard>,
}

/// A card that counts toward 5/24.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecentCard {
    pub card_name: String,
    pub issuer: String,
    pub open_date: NaiveDate,
}

/// Secondary breakdowns shown on the portfolio page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioAnalysis {
    pub annual_fees: AnnualFeeAnalysis,

    /// Issuer name to summed credit limit, for issuers with at least one known limit
    pub issuer_limits: BTreeMap<String, i64>,

    pub unique_issuers: usize,

    /// Every card with a defined utilization, highest first
    pub utilization_breakdown: Vec<UtilizationEntry>,
}

/// Fee-bearing versus no-fee split.
///
/// `fee_cards` is complete and in input order. The dashboard sorts it by fee
/// and slices the top entries itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnualFeeAnalysis {
    pub total: i64,
    pub fee_cards_count: usize,
    pub no_fee_cards_count: usize,
    pub fee_cards: Vec<FeeCard>,
    pub no_fee_cards: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeCard {
    pub id: String,
    pub card_name: String,
    pub annual_fee: i64,
}

/// Credit age summary. Every field is `None` when no card has a known open date.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgeAnalysis {
    pub oldest_card_date: Option<NaiveDate>,
    pub newest_card_date: Option<NaiveDate>,
    pub average_age_months: Option<f64>,
    pub average_age_years: Option<f64>,
}

/// Snapshot of one card's utilization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtilizationEntry {
    pub card_name: String,
    pub balance: i64,
    pub limit: i64,
    pub utilization: i64,
}

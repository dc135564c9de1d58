//! Portfolio analytics engine.
//!
//! Turns one user's credit card records into a [`PortfolioReport`]. The
//! engine is synchronous and does no I/O. Every sub-computation reads the
//! same immutable slice, so the report depends only on the records, the
//! reference date, and the rules.
//!
//! # Degraded data
//!
//! Missing amounts, zero limits, and unknown open dates never fail a report.
//! They are left out of the computations that need them. Only records that
//! break the shape contract (see [`validation`]) are rejected, and then no
//! report is produced at all.

pub mod age;
pub mod dates;
pub mod fees;
pub mod five_24;
pub mod issuers;
pub mod totals;
pub mod utilization;
pub mod validation;

use chrono::NaiveDate;

use crate::models::credit_card::{CreditCardRecord, RawCardRecord};
use crate::models::report::{PortfolioAnalysis, PortfolioReport};
use validation::ValidationError;

/// Thresholds and windows used by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticsRules {
    /// Cards above this utilization are flagged
    pub high_utilization_threshold: i64,

    /// Length of the 5/24 look-back window in calendar months
    pub five_24_window_months: u32,

    /// Number of recent cards that makes a user ineligible
    pub five_24_card_limit: usize,

    /// Maximum entries in `top_utilization_cards`
    pub top_utilization_limit: usize,
}

impl Default for AnalyticsRules {
    fn default() -> Self {
        Self {
            high_utilization_threshold: 30,
            five_24_window_months: 24,
            five_24_card_limit: 5,
            top_utilization_limit: 5,
        }
    }
}

/// Build the report for validated records as of `today`.
pub fn analyze(records: &[CreditCardRecord], today: NaiveDate, rules: &AnalyticsRules) -> PortfolioReport {
    let totals = totals::compute_totals(records);
    let five_24_status = five_24::five_24_status(records, today, rules);
    let annual_fees = fees::analyze_annual_fees(records);
    let age_analysis = age::analyze_age(records, today);
    let issuers = issuers::summarize_issuers(records);

    let utilization_breakdown = utilization::utilization_breakdown(records);
    let top_utilization_cards = utilization::top_utilization(
        &utilization_breakdown,
        rules.high_utilization_threshold,
        rules.top_utilization_limit,
    );

    tracing::debug!(
        total_cards = totals.total_cards,
        cards_in_window = five_24_status.cards_in_24_months,
        high_utilization = top_utilization_cards.len(),
        %today,
        "Portfolio report computed"
    );

    PortfolioReport {
        total_cards: totals.total_cards,
        active_cards: totals.active_cards,
        closed_cards: totals.closed_cards,
        total_credit_limit: totals.total_credit_limit,
        total_current_balance: totals.total_current_balance,
        credit_utilization: totals.credit_utilization,
        five_24_status,
        total_annual_fees: annual_fees.total,
        portfolio_analysis: PortfolioAnalysis {
            annual_fees,
            unique_issuers: issuers.card_counts.len(),
            issuer_limits: issuers.credit_limits,
            utilization_breakdown,
        },
        age_analysis,
        issuer_breakdown: issuers.card_counts,
        top_utilization_cards,
    }
}

/// Validate raw records and build the report.
///
/// Either every record is valid and a full report comes back, or nothing is
/// computed and all validation issues are returned.
pub fn analyze_raw(
    raw: &[RawCardRecord],
    today: NaiveDate,
    rules: &AnalyticsRules,
) -> Result<PortfolioReport, ValidationError> {
    let records = validation::validate_records(raw)?;
    Ok(analyze(&records, today, rules))
}

//! Portfolio-wide counts, sums, and overall utilization.

use crate::analytics::utilization::percent_of;
use crate::models::credit_card::CreditCardRecord;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Totals {
    pub total_cards: usize,
    pub active_cards: usize,
    pub closed_cards: usize,
    pub total_credit_limit: i64,
    pub total_current_balance: i64,
    pub credit_utilization: i64,
}

/// Count cards and sum limits and balances. Unknown amounts add nothing.
///
/// Overall utilization is never negative and is 0 when the portfolio has no
/// credit limit at all.
pub fn compute_totals(records: &[CreditCardRecord]) -> Totals {
    let active_cards = records.iter().filter(|card| card.is_active()).count();

    let total_credit_limit = records
        .iter()
        .filter_map(|card| card.credit_limit_cents)
        .fold(0i64, i64::saturating_add);
    let total_current_balance = records
        .iter()
        .filter_map(|card| card.current_balance_cents)
        .fold(0i64, i64::saturating_add);

    let credit_utilization = percent_of(total_current_balance, total_credit_limit)
        .unwrap_or(0)
        .max(0);

    Totals {
        total_cards: records.len(),
        active_cards,
        closed_cards: records.len() - active_cards,
        total_credit_limit,
        total_current_balance,
        credit_utilization,
    }
}

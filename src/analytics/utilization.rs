//! Per-card utilization and the high-utilization ranking.

use std::cmp::Ordering;

use crate::models::credit_card::CreditCardRecord;
use crate::models::report::UtilizationEntry;

/// `part / whole * 100`, rounded half up to a whole percentage point.
///
/// Integer arithmetic keeps the result exact: 325 of 1000 is 33, not 32.
/// Returns `None` when `whole` is not positive.
pub fn percent_of(part: i64, whole: i64) -> Option<i64> {
    if whole <= 0 {
        return None;
    }

    // floor((200 * part + whole) / (2 * whole)) == floor(100 * part / whole + 0.5)
    let numerator = i128::from(part) * 200 + i128::from(whole);
    let denominator = i128::from(whole) * 2;
    let rounded = numerator.div_euclid(denominator);

    Some(i64::try_from(rounded).unwrap_or(if rounded > 0 { i64::MAX } else { i64::MIN }))
}

/// Utilization of a single card.
///
/// Undefined unless both limit and balance are known and the limit is above zero.
pub fn card_utilization(card: &CreditCardRecord) -> Option<i64> {
    percent_of(card.current_balance_cents?, card.credit_limit_cents?)
}

/// Every card with a defined utilization, in ranking order.
pub fn utilization_breakdown(records: &[CreditCardRecord]) -> Vec<UtilizationEntry> {
    let mut entries: Vec<UtilizationEntry> = records
        .iter()
        .filter_map(|card| {
            let utilization = card_utilization(card)?;
            Some(UtilizationEntry {
                card_name: card.card_name.clone(),
                balance: card.current_balance_cents?,
                limit: card.credit_limit_cents?,
                utilization,
            })
        })
        .collect();

    entries.sort_by(ranking_order);
    entries
}

/// Cards strictly above `threshold`, capped at `limit` entries.
///
/// `ranked` must already be in ranking order.
pub fn top_utilization(ranked: &[UtilizationEntry], threshold: i64, limit: usize) -> Vec<UtilizationEntry> {
    ranked
        .iter()
        .filter(|entry| entry.utilization > threshold)
        .take(limit)
        .cloned()
        .collect()
}

/// Highest utilization first, then larger balance, then card name A to Z.
fn ranking_order(a: &UtilizationEntry, b: &UtilizationEntry) -> Ordering {
    b.utilization
        .cmp(&a.utilization)
        .then_with(|| b.balance.cmp(&a.balance))
        .then_with(|| a.card_name.cmp(&b.card_name))
}

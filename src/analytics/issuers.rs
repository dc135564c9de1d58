//! Issuer grouping.

use std::collections::BTreeMap;

use crate::models::credit_card::CreditCardRecord;

/// Card counts and summed credit limits per issuer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IssuerSummary {
    pub card_counts: BTreeMap<String, usize>,
    pub credit_limits: BTreeMap<String, i64>,
}

/// Group cards by exact issuer name in one pass.
///
/// Names are not normalized, so `Chase` and `chase` are separate issuers.
/// An issuer appears in `credit_limits` only when one of its cards has a
/// known limit.
pub fn summarize_issuers(records: &[CreditCardRecord]) -> IssuerSummary {
    let mut summary = IssuerSummary::default();

    for card in records {
        *summary.card_counts.entry(card.issuer.clone()).or_insert(0) += 1;

        if let Some(limit) = card.credit_limit_cents {
            let total = summary.credit_limits.entry(card.issuer.clone()).or_insert(0);
            *total = total.saturating_add(limit);
        }
    }

    summary
}

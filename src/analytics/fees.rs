//! Annual fee partitioning.

use crate::models::credit_card::CreditCardRecord;
use crate::models::report::{AnnualFeeAnalysis, FeeCard};

/// Split cards into fee-bearing and no-fee.
///
/// A card carries a fee only when `annual_fee_cents` is known and above zero.
/// Fee cards keep input order.
pub fn analyze_annual_fees(records: &[CreditCardRecord]) -> AnnualFeeAnalysis {
    let mut fee_cards = Vec::new();
    let mut no_fee_cards = Vec::new();
    let mut total = 0i64;

    for card in records {
        match card.annual_fee_cents {
            Some(fee) if fee > 0 => {
                total = total.saturating_add(fee);
                fee_cards.push(FeeCard {
                    id: card.id.clone(),
                    card_name: card.card_name.clone(),
                    annual_fee: fee,
                });
            }
            _ => no_fee_cards.push(card.card_name.clone()),
        }
    }

    AnnualFeeAnalysis {
        total,
        fee_cards_count: fee_cards.len(),
        no_fee_cards_count: no_fee_cards.len(),
        fee_cards,
        no_fee_cards,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::credit_card::CardStatus;

    fn card(name: &str, fee: Option<i64>) -> CreditCardRecord {
        CreditCardRecord {
            id: format!("id-{name}"),
            card_name: name.to_string(),
            issuer: "American Express".to_string(),
            account_number_suffix: "5678".to_string(),
            status: CardStatus::Active,
            open_date: None,
            credit_limit_cents: None,
            current_balance_cents: None,
            annual_fee_cents: fee,
        }
    }

    #[test]
    fn partitions_on_positive_fee() {
        let records = vec![
            card("Gold", Some(25_000)),
            card("Blue Cash", Some(0)),
            card("Unknown fee", None),
            card("Sapphire", Some(9_500)),
        ];

        let fees = analyze_annual_fees(&records);

        assert_eq!(fees.total, 34_500);
        assert_eq!(fees.fee_cards_count, 2);
        assert_eq!(fees.no_fee_cards_count, 2);
        assert_eq!(
            fees.fee_cards,
            vec![
                FeeCard {
                    id: "id-Gold".to_string(),
                    card_name: "Gold".to_string(),
                    annual_fee: 25_000,
                },
                FeeCard {
                    id: "id-Sapphire".to_string(),
                    card_name: "Sapphire".to_string(),
                    annual_fee: 9_500,
                },
            ]
        );
        assert_eq!(fees.no_fee_cards, vec!["Blue Cash", "Unknown fee"]);
    }

    #[test]
    fn empty_portfolio_has_no_fees() {
        let fees = analyze_annual_fees(&[]);
        assert_eq!(fees.total, 0);
        assert_eq!(fees.fee_cards_count, 0);
        assert_eq!(fees.no_fee_cards_count, 0);
    }
}

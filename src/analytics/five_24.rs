//! The 5/24 application-eligibility rule.
//!
//! Some issuers decline new applications from anyone who opened five or more
//! cards in the trailing 24 calendar months. Cards count whatever their
//! current status; only a known open date inside the window matters.

use chrono::NaiveDate;

use crate::analytics::AnalyticsRules;
use crate::analytics::dates::{months_after, months_before, whole_months_between};
use crate::models::credit_card::CreditCardRecord;
use crate::models::report::{EligibilityStatus, Five24Status, RecentCard};

/// Evaluate 5/24 as of `today`.
///
/// The window starts `five_24_window_months` calendar months before `today`
/// and includes its first day. Cards with an unknown open date never count.
pub fn five_24_status(records: &[CreditCardRecord], today: NaiveDate, rules: &AnalyticsRules) -> Five24Status {
    let window = rules.five_24_window_months;
    let cutoff = months_before(today, window);

    let mut recent: Vec<RecentCard> = records
        .iter()
        .filter_map(|card| {
            let opened = card.open_date?;
            (opened >= cutoff).then(|| RecentCard {
                card_name: card.card_name.clone(),
                issuer: card.issuer.clone(),
                open_date: opened,
            })
        })
        .collect();
    recent.sort_by(|a, b| {
        b.open_date
            .cmp(&a.open_date)
            .then_with(|| a.card_name.cmp(&b.card_name))
    });

    let limit = rules.five_24_card_limit;
    let cards_in_24_months = recent.len();
    let remaining_slots = limit.saturating_sub(cards_in_24_months);
    let is_eligible = cards_in_24_months < limit;

    if is_eligible {
        let plural = if remaining_slots == 1 { "" } else { "s" };
        return Five24Status {
            status: EligibilityStatus::Eligible,
            is_eligible,
            cards_in_24_months,
            remaining_slots,
            recommendation: format!(
                "You have {remaining_slots} slot{plural} available: you can open {remaining_slots} more card{plural} before reaching {limit}/{window}"
            ),
            months_until_eligible: None,
            recent_cards: recent,
        };
    }

    // The limit-th newest card is the one that has to leave the window
    let months_until_eligible = limit
        .checked_sub(1)
        .and_then(|position| recent.get(position))
        .map(|blocking| months_until_aged_out(blocking.open_date, today, window));

    let recommendation = match months_until_eligible {
        Some(months) => {
            let plural = if months == 1 { "" } else { "s" };
            format!(
                "Wait {months} month{plural} for older cards to age out of the {window}-month window"
            )
        }
        None => format!("Wait for older cards to age out of the {window}-month window"),
    };

    Five24Status {
        status: EligibilityStatus::NotEligible,
        is_eligible,
        cards_in_24_months,
        remaining_slots,
        recommendation,
        months_until_eligible,
        recent_cards: recent,
    }
}

/// Whole months, rounded up, from `today` until `opened + window` months.
///
/// Never less than one: a card on the window boundary still counts today.
fn months_until_aged_out(opened: NaiveDate, today: NaiveDate, window: u32) -> u32 {
    let ages_out = months_after(opened, window);
    if ages_out <= today {
        return 1;
    }

    let full_months = whole_months_between(today, ages_out);
    let months = if months_after(today, full_months) < ages_out {
        full_months + 1
    } else {
        full_months
    };
    months.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::credit_card::CardStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn opened(name: &str, open_date: Option<NaiveDate>) -> CreditCardRecord {
        CreditCardRecord {
            id: name.to_string(),
            card_name: name.to_string(),
            issuer: "Chase".to_string(),
            account_number_suffix: "1111".to_string(),
            status: CardStatus::Active,
            open_date,
            credit_limit_cents: None,
            current_balance_cents: None,
            annual_fee_cents: None,
        }
    }

    fn months_ago(today: NaiveDate, months: u32) -> Option<NaiveDate> {
        Some(months_before(today, months))
    }

    #[test]
    fn five_cards_inside_the_window_block_eligibility() {
        let today = date(2025, 3, 15);
        let records: Vec<CreditCardRecord> = [1, 3, 10, 20, 23]
            .iter()
            .map(|&m| opened(&format!("{m} months"), months_ago(today, m)))
            .collect();

        let status = five_24_status(&records, today, &AnalyticsRules::default());

        assert_eq!(status.cards_in_24_months, 5);
        assert!(!status.is_eligible);
        assert_eq!(status.remaining_slots, 0);
        assert_eq!(status.status, EligibilityStatus::NotEligible);
        // The card opened 23 months ago leaves after one more month
        assert_eq!(status.months_until_eligible, Some(1));
        assert_eq!(
            status.recommendation,
            "Wait 1 month for older cards to age out of the 24-month window"
        );
        assert_eq!(status.recent_cards[0].card_name, "1 months");
    }

    #[test]
    fn cutoff_is_inclusive() {
        let today = date(2025, 3, 15);
        let records = vec![
            opened("boundary", Some(date(2023, 3, 15))),
            opened("just outside", Some(date(2023, 3, 14))),
        ];

        let status = five_24_status(&records, today, &AnalyticsRules::default());

        assert_eq!(status.cards_in_24_months, 1);
        assert_eq!(status.recent_cards[0].card_name, "boundary");
        assert_eq!(status.remaining_slots, 4);
    }

    #[test]
    fn unknown_dates_never_count() {
        let today = date(2025, 3, 15);
        let records: Vec<CreditCardRecord> = (0..6).map(|i| opened(&format!("card {i}"), None)).collect();

        let status = five_24_status(&records, today, &AnalyticsRules::default());

        assert_eq!(status.cards_in_24_months, 0);
        assert!(status.is_eligible);
        assert_eq!(status.remaining_slots, 5);
        assert_eq!(status.status, EligibilityStatus::Eligible);
        assert_eq!(status.months_until_eligible, None);
        assert_eq!(
            status.recommendation,
            "You have 5 slots available: you can open 5 more cards before reaching 5/24"
        );
    }

    #[test]
    fn waiting_period_tracks_the_fifth_newest_card() {
        let today = date(2025, 3, 15);
        let records = vec![
            opened("a", Some(date(2025, 1, 1))),
            opened("b", Some(date(2024, 11, 1))),
            opened("c", Some(date(2024, 6, 1))),
            opened("d", Some(date(2024, 1, 1))),
            opened("e", Some(date(2023, 6, 10))),
            opened("f", Some(date(2023, 4, 1))),
        ];

        let status = five_24_status(&records, today, &AnalyticsRules::default());

        assert_eq!(status.cards_in_24_months, 6);
        assert_eq!(status.remaining_slots, 0);
        // "e" ages out on 2025-06-10: two months and 26 days away
        assert_eq!(status.months_until_eligible, Some(3));
    }

    #[test]
    fn waiting_period_on_exact_month_boundary() {
        assert_eq!(months_until_aged_out(date(2023, 6, 15), date(2025, 3, 15), 24), 3);
        assert_eq!(months_until_aged_out(date(2023, 3, 15), date(2025, 3, 15), 24), 1);
    }

    #[test]
    fn one_slot_left_uses_singular_wording() {
        let today = date(2025, 3, 15);
        let records: Vec<CreditCardRecord> = (1..=4)
            .map(|m| opened(&format!("card {m}"), months_ago(today, m)))
            .collect();

        let status = five_24_status(&records, today, &AnalyticsRules::default());

        assert_eq!(status.remaining_slots, 1);
        assert_eq!(
            status.recommendation,
            "You have 1 slot available: you can open 1 more card before reaching 5/24"
        );
    }

    #[test]
    fn window_and_limit_follow_the_rules() {
        let today = date(2025, 3, 15);
        let records = vec![
            opened("a", Some(date(2025, 1, 1))),
            opened("b", Some(date(2024, 2, 1))),
        ];
        let rules = AnalyticsRules {
            five_24_window_months: 12,
            five_24_card_limit: 1,
            ..AnalyticsRules::default()
        };

        let status = five_24_status(&records, today, &rules);

        assert_eq!(status.cards_in_24_months, 1);
        assert!(!status.is_eligible);
        // 2025-01-01 ages out of a 12-month window on 2026-01-01
        assert_eq!(status.months_until_eligible, Some(10));
    }
}

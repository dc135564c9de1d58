//! Credit age analysis.

use chrono::NaiveDate;

use crate::analytics::dates::whole_months_between;
use crate::models::credit_card::CreditCardRecord;
use crate::models::report::AgeAnalysis;

/// Oldest and newest open dates plus average account age.
///
/// Each card's age is measured in whole months first and the ages are then
/// averaged. Cards opened after `today` are zero months old. Only cards with
/// a known open date take part.
pub fn analyze_age(records: &[CreditCardRecord], today: NaiveDate) -> AgeAnalysis {
    let dates: Vec<NaiveDate> = records.iter().filter_map(|card| card.open_date).collect();

    let (Some(oldest), Some(newest)) = (dates.iter().min(), dates.iter().max()) else {
        return AgeAnalysis::default();
    };

    let total_months: u64 = dates
        .iter()
        .map(|opened| u64::from(whole_months_between(*opened, today)))
        .sum();
    let average_months = total_months as f64 / dates.len() as f64;

    AgeAnalysis {
        oldest_card_date: Some(*oldest),
        newest_card_date: Some(*newest),
        average_age_months: Some(round_to_tenth(average_months)),
        average_age_years: Some(round_to_tenth(average_months / 12.0)),
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
